//! # Design Patterns in Rust
//!
//! The classic object-oriented patterns, plus SOLID, expressed with traits,
//! ownership and composition.
//!
//! ## SOLID
//! - Single responsibility, open/closed, Liskov substitution, interface
//!   segregation, dependency inversion ([`solid`])
//!
//! ## Creational
//! - Builder: fluent, nested and faceted builders ([`builder`])
//! - Factory: factory methods, abstract and functional factories ([`factory`])
//! - Prototype: deep copies and prototype factories ([`prototype`])
//! - Singleton: lazily initialised instances, monostate ([`singleton`])
//!
//! ## Structural
//! - Adapter ([`adapter`])
//! - Bridge, including pimpl ([`bridge`])
//! - Composite ([`composite`])
//! - Decorator: dynamic, static and functional ([`decorator`])
//! - Flyweight: string interning and shared formatting ([`flyweight`])
//! - Proxy: property, virtual, protection and communication ([`proxy`])
//!
//! ## Running
//!
//! Every module registers its demonstrations in the [`catalog::Catalog`]:
//!
//! ```bash
//! cargo run --bin patterns -- list
//! cargo run --bin patterns -- run flyweight-users singleton-database
//! cargo run --bin patterns -- run --all
//! ```

pub mod adapter;
pub mod bridge;
pub mod builder;
pub mod catalog;
pub mod composite;
pub mod config;
pub mod decorator;
pub mod error;
pub mod factory;
pub mod flyweight;
pub mod logging;
pub mod prototype;
pub mod proxy;
pub mod singleton;
pub mod solid;

pub use error::{PatternError, Result};
