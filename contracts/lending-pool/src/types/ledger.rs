use lending_pool_interface::types::deposit_kind::DepositKind;
use lending_pool_interface::types::error::Error;
use lending_pool_interface::types::user_account::UserAccount;
use soroban_sdk::{Address, Env, Map, Symbol};

use crate::storage::{read_account, write_account};

#[derive(Clone, Copy)]
enum Bucket {
    Wallet,
    Collateral,
    Supplied,
    Borrowed,
}

/// Balances of one account. Mutations are staged in memory and committed by `write`,
/// so a failed check never leaves a partially updated account in storage.
pub struct Ledger<'a> {
    env: &'a Env,
    who: &'a Address,
    account: UserAccount,
    should_write: bool,
}

impl<'a> Ledger<'a> {
    pub fn load(env: &'a Env, who: &'a Address) -> Self {
        Self {
            env,
            who,
            account: read_account(env, who),
            should_write: false,
        }
    }

    pub fn account(&self) -> &UserAccount {
        &self.account
    }

    pub fn deposit(
        &mut self,
        asset: &Symbol,
        amount: i128,
        kind: DepositKind,
    ) -> Result<&mut Self, Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let bucket = match kind {
            DepositKind::Wallet => Bucket::Wallet,
            DepositKind::Collateral => Bucket::Collateral,
            DepositKind::Pool => Bucket::Supplied,
        };

        self.credit(bucket, asset, amount)
    }

    pub fn supply(&mut self, asset: &Symbol, amount: i128) -> Result<&mut Self, Error> {
        self.debit(Bucket::Wallet, asset, amount)?
            .credit(Bucket::Supplied, asset, amount)
    }

    pub fn withdraw_supply(&mut self, asset: &Symbol, amount: i128) -> Result<&mut Self, Error> {
        self.debit(Bucket::Supplied, asset, amount)?
            .credit(Bucket::Wallet, asset, amount)
    }

    pub fn deposit_collateral(&mut self, asset: &Symbol, amount: i128) -> Result<&mut Self, Error> {
        self.debit(Bucket::Wallet, asset, amount)?
            .credit(Bucket::Collateral, asset, amount)
    }

    pub fn withdraw_collateral(
        &mut self,
        asset: &Symbol,
        amount: i128,
    ) -> Result<&mut Self, Error> {
        self.debit(Bucket::Collateral, asset, amount)?
            .credit(Bucket::Wallet, asset, amount)
    }

    /// Removes collateral without crediting the wallet, the counterparty receives it
    pub fn seize_collateral(&mut self, asset: &Symbol, amount: i128) -> Result<&mut Self, Error> {
        self.debit(Bucket::Collateral, asset, amount)
    }

    pub fn credit_wallet(&mut self, asset: &Symbol, amount: i128) -> Result<&mut Self, Error> {
        self.credit(Bucket::Wallet, asset, amount)
    }

    pub fn debit_wallet(&mut self, asset: &Symbol, amount: i128) -> Result<&mut Self, Error> {
        self.debit(Bucket::Wallet, asset, amount)
    }

    pub fn record_borrow(&mut self, asset: &Symbol, amount: i128) -> Result<&mut Self, Error> {
        self.credit(Bucket::Borrowed, asset, amount)
    }

    pub fn record_repay(&mut self, asset: &Symbol, amount: i128) -> Result<&mut Self, Error> {
        if amount > self.account.borrowed_of(asset) {
            return Err(Error::OverRepay);
        }

        self.debit(Bucket::Borrowed, asset, amount)
    }

    pub fn write(&mut self) {
        if !self.should_write {
            return;
        }

        write_account(self.env, self.who, &self.account);
        self.should_write = false;
    }

    fn credit(&mut self, bucket: Bucket, asset: &Symbol, amount: i128) -> Result<&mut Self, Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let balances = self.bucket_mut(bucket);
        let balance = balances
            .get(asset.clone())
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or(Error::MathOverflowError)?;
        balances.set(asset.clone(), balance);

        self.should_write = true;

        Ok(self)
    }

    fn debit(&mut self, bucket: Bucket, asset: &Symbol, amount: i128) -> Result<&mut Self, Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let balances = self.bucket_mut(bucket);
        let balance = balances.get(asset.clone()).unwrap_or(0);

        if amount > balance {
            return Err(Error::InsufficientBalance);
        }

        let balance = balance - amount;
        if balance == 0 {
            balances.remove(asset.clone());
        } else {
            balances.set(asset.clone(), balance);
        }

        self.should_write = true;

        Ok(self)
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Map<Symbol, i128> {
        match bucket {
            Bucket::Wallet => &mut self.account.wallet,
            Bucket::Collateral => &mut self.account.collateral,
            Bucket::Supplied => &mut self.account.supplied,
            Bucket::Borrowed => &mut self.account.borrowed,
        }
    }
}
