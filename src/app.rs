//! Application context wiring config, session, and ledger together.

use farmledger_config::Config;
use farmledger_core::{
    ledger_warnings, AuthError, CoreResult, CropService, ExpenseService, IdentityProvider,
    IncomeService, MockIdentityProvider, ProfitSummary, Session, SummaryService,
};
use farmledger_domain::{Crop, Expense, FarmLedger, Income, NewCrop, NewExpense, NewIncome, User};
use tracing::info;
use uuid::Uuid;

/// Owns the per-session state the presentation layer consumes: the active
/// user, the in-memory ledger, and user preferences.
///
/// This replaces the original provider-scoped globals with an explicit
/// context struct passed by reference to the UI layer. Every operation is
/// synchronous and completes within the call that issued it.
pub struct App<P: IdentityProvider> {
    config: Config,
    session: Session<P>,
    ledger: FarmLedger,
}

impl App<MockIdentityProvider> {
    /// Creates an app backed by the mock identity provider, the only
    /// backend in the current scope.
    pub fn new(config: Config) -> Self {
        Self::with_provider(config, MockIdentityProvider)
    }
}

impl<P: IdentityProvider> App<P> {
    pub fn with_provider(config: Config, provider: P) -> Self {
        let mut session = Session::new(provider);
        session.restore();
        Self {
            config,
            session,
            ledger: FarmLedger::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ── Identity holder surface ──

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        self.session.login(email, password)
    }

    pub fn login_with_phone(
        &mut self,
        phone_number: &str,
        code: &str,
    ) -> Result<&User, AuthError> {
        self.session.login_with_phone(phone_number, code)
    }

    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<&User, AuthError> {
        self.session.register(email, password, display_name)
    }

    /// Clears the active user and discards the in-memory ledger; nothing
    /// recorded during the session outlives it.
    pub fn logout(&mut self) {
        self.session.logout();
        let discarded = self.ledger.crop_count()
            + self.ledger.expense_count()
            + self.ledger.income_count();
        if discarded > 0 {
            info!(records = discarded, "session ledger discarded");
        }
        self.ledger = FarmLedger::new();
    }

    // ── Ledger store surface ──

    pub fn crops(&self) -> &[Crop] {
        &self.ledger.crops
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.ledger.expenses
    }

    pub fn incomes(&self) -> &[Income] {
        &self.ledger.incomes
    }

    pub fn ledger(&self) -> &FarmLedger {
        &self.ledger
    }

    /// Records a crop for the active user. Fails with `NotAuthenticated`
    /// when nobody is logged in, leaving the collection unchanged.
    pub fn add_crop(&mut self, new: NewCrop) -> CoreResult<Crop> {
        let owner = self.session.require_user()?.clone();
        CropService::add(&mut self.ledger, &owner, new)
    }

    /// Records an expense for the active user. Same contract as
    /// [`App::add_crop`].
    pub fn add_expense(&mut self, new: NewExpense) -> CoreResult<Expense> {
        let owner = self.session.require_user()?.clone();
        ExpenseService::add(&mut self.ledger, &owner, new)
    }

    /// Records an income for the active user; the stored amount is derived
    /// from quantity and price. Same contract as [`App::add_crop`].
    pub fn add_income(&mut self, new: NewIncome) -> CoreResult<Income> {
        let owner = self.session.require_user()?.clone();
        IncomeService::add(&mut self.ledger, &owner, new)
    }

    pub fn total_expenses(&self, crop: Option<Uuid>) -> f64 {
        SummaryService::total_expenses(&self.ledger, crop)
    }

    pub fn total_income(&self, crop: Option<Uuid>) -> f64 {
        SummaryService::total_income(&self.ledger, crop)
    }

    pub fn profit(&self, crop: Option<Uuid>) -> f64 {
        SummaryService::profit(&self.ledger, crop)
    }

    pub fn summary(&self, crop: Option<Uuid>) -> ProfitSummary {
        SummaryService::totals(&self.ledger, crop)
    }

    /// Dangling-reference diagnostics for the current ledger snapshot.
    pub fn warnings(&self) -> Vec<String> {
        ledger_warnings(&self.ledger)
    }
}
