//! # Proxy
//!
//! An object with the interface of another that controls access to it.
//!
//! - [`property`]: fields behind accessors
//! - [`lazy`]: virtual proxy that defers loading
//! - [`account`]: a protection proxy auditing account operations
//! - [`ping`]: communication proxy

pub mod account;
pub mod lazy;
pub mod ping;
pub mod property;

use crate::catalog::{Family, Showcase};
use crate::config::DemoConfig;
use crate::error::Result;

pub fn showcases() -> Vec<Showcase> {
    vec![
        Showcase::new(
            "proxy-property",
            Family::Proxy,
            "Creature fields as properties",
            property_demo,
        ),
        Showcase::new(
            "proxy-lazy",
            Family::Proxy,
            "Bitmap loaded on first draw",
            lazy_demo,
        ),
        Showcase::new(
            "proxy-account",
            Family::Proxy,
            "Audited bank account",
            account_demo,
        ),
        Showcase::new(
            "proxy-ping",
            Family::Proxy,
            "Ping through a communication interface",
            ping_demo,
        ),
    ]
}

fn property_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    let mut creature = property::PropertyCreature::new(10, 10);
    creature.agility.set(20);
    Ok(vec![creature.to_string()])
}

fn lazy_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use lazy::{Bitmap, Image, LazyBitmap};

    let bitmap = Bitmap::load("bitmap.bmp");
    let lazy = LazyBitmap::new("lazybitmap.bmp");
    let mut lines = vec![
        bitmap.draw(),
        format!("lazybitmap.bmp loaded before draw: {}", lazy.is_loaded()),
    ];
    lines.push(lazy.draw());
    lines.push(lazy.draw());
    lines.push(format!("lazybitmap.bmp loads: {}", lazy.load_count()));
    Ok(lines)
}

fn account_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    use account::{AuditedAccount, BankAccount, CurrentAccount};

    let mut account = AuditedAccount::new(CurrentAccount::new(123));
    account.deposit(123);
    account.withdraw(123);
    let overdraft = account.withdraw(500);
    Ok(vec![
        format!("overdraft accepted: {overdraft}"),
        format!("operations: {}", account.operations()),
        account.into_inner().to_string(),
    ])
}

fn ping_demo(_config: &DemoConfig) -> Result<Vec<String>> {
    let pong = ping::Pong;
    Ok((0..3).map(|_| ping::try_it(&pong)).collect())
}
