//! Faceted builder: one builder per aspect of the person, all sharing the
//! object under construction. `lives()` and `works()` hop between facets.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    name: String,
    street_address: String,
    post_code: String,
    city: String,
    company_name: String,
    position: String,
    annual_income: u64,
}

impl Person {
    pub fn create() -> PersonBuilder {
        PersonBuilder {
            person: Person::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn annual_income(&self) -> u64 {
        self.annual_income
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} lives at: ", self.name)?;
        writeln!(f, "\t{}, {}, {}", self.street_address, self.city, self.post_code)?;
        writeln!(f, "and works as:")?;
        writeln!(
            f,
            "\t{} at {} with annual income ${}",
            self.position, self.company_name, self.annual_income
        )
    }
}

/// Shared facet switching. Every facet owns the person, so hopping moves it
/// along without copies.
pub trait PersonFacet: Sized {
    fn into_person(self) -> Person;

    fn lives(self) -> PersonAddressBuilder {
        PersonAddressBuilder {
            person: self.into_person(),
        }
    }

    fn works(self) -> PersonJobBuilder {
        PersonJobBuilder {
            person: self.into_person(),
        }
    }

    fn build(self) -> Person {
        self.into_person()
    }
}

#[must_use = "builders do nothing unless built"]
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.person.name = name.into();
        self
    }
}

impl PersonFacet for PersonBuilder {
    fn into_person(self) -> Person {
        self.person
    }
}

#[must_use = "builders do nothing unless built"]
pub struct PersonAddressBuilder {
    person: Person,
}

impl PersonAddressBuilder {
    pub fn at(mut self, street_address: impl Into<String>) -> Self {
        self.person.street_address = street_address.into();
        self
    }

    pub fn with_postcode(mut self, post_code: impl Into<String>) -> Self {
        self.person.post_code = post_code.into();
        self
    }

    pub fn in_city(mut self, city: impl Into<String>) -> Self {
        self.person.city = city.into();
        self
    }
}

impl PersonFacet for PersonAddressBuilder {
    fn into_person(self) -> Person {
        self.person
    }
}

#[must_use = "builders do nothing unless built"]
pub struct PersonJobBuilder {
    person: Person,
}

impl PersonJobBuilder {
    pub fn at(mut self, company_name: impl Into<String>) -> Self {
        self.person.company_name = company_name.into();
        self
    }

    pub fn as_a(mut self, position: impl Into<String>) -> Self {
        self.person.position = position.into();
        self
    }

    pub fn earning(mut self, annual_income: u64) -> Self {
        self.person.annual_income = annual_income;
        self
    }
}

impl PersonFacet for PersonJobBuilder {
    fn into_person(self) -> Person {
        self.person
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn felix() -> Person {
        Person::create()
            .named("Felix Yagunglepuss")
            .lives()
            .at("123 London Road")
            .with_postcode("SW1 1GB")
            .in_city("London")
            .works()
            .at("Pragmasoft")
            .as_a("Consultant")
            .earning(10_000_000)
            .build()
    }

    #[test]
    fn test_facets_fill_one_person() {
        let person = felix();
        assert_eq!(person.name(), "Felix Yagunglepuss");
        assert_eq!(person.city(), "London");
        assert_eq!(person.company_name(), "Pragmasoft");
        assert_eq!(person.annual_income(), 10_000_000);
    }

    #[test]
    fn test_display_layout() {
        assert_eq!(
            felix().to_string(),
            "Felix Yagunglepuss lives at: \n\
             \t123 London Road, London, SW1 1GB\n\
             and works as:\n\
             \tConsultant at Pragmasoft with annual income $10000000\n"
        );
    }

    #[test]
    fn test_facets_in_any_order() {
        let person = Person::create()
            .works()
            .at("Acme")
            .lives()
            .in_city("Paris")
            .works()
            .earning(1)
            .build();
        assert_eq!(person.company_name(), "Acme");
        assert_eq!(person.city(), "Paris");
        assert_eq!(person.annual_income(), 1);
        assert_eq!(person.name(), "");
    }
}
