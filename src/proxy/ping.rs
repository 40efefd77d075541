//! Communication proxy: callers only see `Pingable`, not where the answer
//! comes from.

pub trait Pingable {
    fn ping(&self, message: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Pong;

impl Pingable for Pong {
    fn ping(&self, message: &str) -> String {
        format!("{message} pong")
    }
}

pub fn try_it(pingable: &dyn Pingable) -> String {
    pingable.ping("ping")
}
