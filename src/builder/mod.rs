//! # Builder
//!
//! Piecewise construction of complex objects through chained calls.
//!
//! - [`html`]: fluent builder for an HTML element tree
//! - [`tag`]: groovy-style nested constructors
//! - [`person`]: faceted builder hopping between address and job facets
//! - [`code`]: class-definition builder

pub mod code;
pub mod html;
pub mod person;
pub mod tag;

use crate::catalog::{Family, Showcase};
use crate::config::DemoConfig;
use crate::error::Result;

pub fn showcases() -> Vec<Showcase> {
    vec![
        Showcase::new(
            "builder-html",
            Family::Builder,
            "Fluent HTML element builder",
            html_demo,
        ),
        Showcase::new(
            "builder-tags",
            Family::Builder,
            "Groovy-style nested tag constructors",
            tag_demo,
        ),
        Showcase::new(
            "builder-person",
            Family::Builder,
            "Faceted person builder",
            person_demo,
        ),
        Showcase::new(
            "builder-code",
            Family::Builder,
            "Class definition builder",
            code_demo,
        ),
    ]
}

fn lines_of(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

fn html_demo(config: &DemoConfig) -> Result<Vec<String>> {
    let words = html::HtmlElement::builder("ul")
        .child("li", "hello")
        .child("li", "world")
        .child("li", "from")
        .child("li", "Fayfay")
        .build();
    Ok(lines_of(&words.render(config.html_indent)))
}

fn tag_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    let page = format!(
        "{}{}",
        tag::p("This is Pikachu!"),
        tag::p_with([tag::img("http://pokemon.com/pikachu.png")])
    );
    Ok(lines_of(&page))
}

fn person_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use person::{Person, PersonFacet};

    let person = Person::create()
        .named("Felix Yagunglepuss")
        .lives()
        .at("123 London Road")
        .with_postcode("SW1 1GB")
        .in_city("London")
        .works()
        .at("Pragmasoft")
        .as_a("Consultant")
        .earning(10_000_000)
        .build();
    Ok(lines_of(&person.to_string()))
}

fn code_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    let code = code::CodeBuilder::new("Person")
        .add_field("name", "string")
        .add_field("age", "int")
        .build();
    Ok(lines_of(&code.to_string()))
}
