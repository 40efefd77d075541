use std::fmt;

pub trait BankAccount {
    /// Returns whether the deposit went through; it fails only when the
    /// balance would overflow.
    fn deposit(&mut self, amount: u64) -> bool;
    /// Returns whether the withdrawal went through.
    fn withdraw(&mut self, amount: u64) -> bool;
    fn balance(&self) -> u64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentAccount {
    balance: u64,
}

impl CurrentAccount {
    pub fn new(balance: u64) -> Self {
        CurrentAccount { balance }
    }
}

impl BankAccount for CurrentAccount {
    fn deposit(&mut self, amount: u64) -> bool {
        match self.balance.checked_add(amount) {
            Some(balance) => {
                self.balance = balance;
                true
            }
            None => false,
        }
    }

    fn withdraw(&mut self, amount: u64) -> bool {
        match self.balance.checked_sub(amount) {
            Some(balance) => {
                self.balance = balance;
                true
            }
            None => false,
        }
    }

    fn balance(&self) -> u64 {
        self.balance
    }
}

impl fmt::Display for CurrentAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "balance: {}", self.balance)
    }
}

/// Same interface as the account it wraps, plus a count of operations.
#[derive(Debug)]
pub struct AuditedAccount<A> {
    inner: A,
    operations: usize,
}

impl<A: BankAccount> AuditedAccount<A> {
    pub fn new(inner: A) -> Self {
        AuditedAccount {
            inner,
            operations: 0,
        }
    }

    pub fn operations(&self) -> usize {
        self.operations
    }

    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<A: BankAccount> BankAccount for AuditedAccount<A> {
    fn deposit(&mut self, amount: u64) -> bool {
        self.operations += 1;
        tracing::debug!(amount, "deposit");
        let accepted = self.inner.deposit(amount);
        if !accepted {
            tracing::warn!(amount, balance = self.inner.balance(), "deposit rejected");
        }
        accepted
    }

    fn withdraw(&mut self, amount: u64) -> bool {
        self.operations += 1;
        let accepted = self.inner.withdraw(amount);
        if !accepted {
            tracing::warn!(amount, balance = self.inner.balance(), "withdrawal rejected");
        }
        accepted
    }

    fn balance(&self) -> u64 {
        self.inner.balance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overdraft_rejected() {
        let mut account = CurrentAccount::new(100);
        assert!(!account.withdraw(150));
        assert!(account.withdraw(100));
        assert_eq!(account.balance(), 0);
    }

    #[test]
    fn test_audited_counts_operations() {
        let mut account = AuditedAccount::new(CurrentAccount::new(123));
        assert!(account.deposit(123));
        assert!(account.withdraw(123));
        assert!(!account.withdraw(1_000));

        assert_eq!(account.operations(), 3);
        assert_eq!(account.balance(), 123);
        assert_eq!(account.into_inner().to_string(), "balance: 123");
    }

    #[test]
    fn test_through_trait_object() {
        let mut account: Box<dyn BankAccount> = Box::new(AuditedAccount::new(CurrentAccount::new(0)));
        account.deposit(5);
        assert_eq!(account.balance(), 5);
    }

    #[test]
    fn test_withdraw_never_raises_balance() {
        let mut account = CurrentAccount::new(10);
        assert!(!account.withdraw(11));
        assert!(account.withdraw(0));
        assert_eq!(account.balance(), 10);
    }

    #[test]
    fn test_deposit_overflow_rejected() {
        let mut account = AuditedAccount::new(CurrentAccount::new(u64::MAX - 1));
        assert!(account.deposit(1));
        assert!(!account.deposit(1));
        assert_eq!(account.balance(), u64::MAX);
        assert_eq!(account.operations(), 2);
    }
}
