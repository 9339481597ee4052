//! User registration service
//!
//! Validates a registration request, assigns the credit limit for the
//! owning client's tier and hands accepted users to the user repository.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::{ClientId, CreditLimit, NewUser};
use crate::domain::ports::{ClientRepository, Clock, CreditScorer, UserRepository};
use crate::domain::rules;
use crate::error::DomainError;

/// Why a registration was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    MissingName,
    InvalidEmail,
    Underage { age: i32 },
    UnknownClient(ClientId),
    InsufficientCredit { limit: i64 },
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectionReason::MissingName => write!(f, "first and last name are required"),
            RejectionReason::InvalidEmail => write!(f, "email address is invalid"),
            RejectionReason::Underage { age } => write!(
                f,
                "user is {} years old, minimum is {}",
                age,
                rules::MINIMUM_AGE
            ),
            RejectionReason::UnknownClient(id) => write!(f, "client {} does not exist", id),
            RejectionReason::InsufficientCredit { limit } => write!(
                f,
                "credit limit {} is below {}",
                limit,
                rules::MINIMUM_CREDIT_LIMIT
            ),
        }
    }
}

/// Outcome of a registration that did not hit a collaborator failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationDecision {
    /// The user was stored with this credit limit
    Accepted { credit_limit: CreditLimit },
    Rejected(RejectionReason),
}

impl RegistrationDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, RegistrationDecision::Accepted { .. })
    }
}

/// Service for registering users
pub struct UserService<CR, CS, UR, CK>
where
    CR: ClientRepository,
    CS: CreditScorer,
    UR: UserRepository,
    CK: Clock,
{
    clients: Arc<CR>,
    credit: Arc<CS>,
    users: Arc<UR>,
    clock: Arc<CK>,
}

impl<CR, CS, UR, CK> UserService<CR, CS, UR, CK>
where
    CR: ClientRepository,
    CS: CreditScorer,
    UR: UserRepository,
    CK: Clock,
{
    pub fn new(clients: Arc<CR>, credit: Arc<CS>, users: Arc<UR>, clock: Arc<CK>) -> Self {
        Self {
            clients,
            credit,
            users,
            clock,
        }
    }

    /// Register a new user
    ///
    /// Returns `Ok(true)` when the user was stored and `Ok(false)` when a
    /// validation or eligibility rule rejected the request. Collaborator
    /// failures are returned as errors.
    pub fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        date_of_birth: NaiveDate,
        client_id: ClientId,
    ) -> Result<bool, DomainError> {
        self.decide(first_name, last_name, email, date_of_birth, client_id)
            .map(|decision| decision.is_accepted())
    }

    /// Register a new user, reporting why a rejected request was turned down
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// 1. Name presence
    /// 2. Email shape
    /// 3. Minimum age
    /// 4. Client lookup
    /// 5. Credit limit for the client's tier
    ///
    /// The user repository is only called once every check has passed.
    pub fn decide(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        date_of_birth: NaiveDate,
        client_id: ClientId,
    ) -> Result<RegistrationDecision, DomainError> {
        if !rules::has_full_name(first_name, last_name) {
            return Ok(rejected(RejectionReason::MissingName));
        }

        if !rules::is_valid_email(email) {
            return Ok(rejected(RejectionReason::InvalidEmail));
        }

        let age = rules::age_on(date_of_birth, self.clock.today());
        if !rules::is_of_age(age) {
            return Ok(rejected(RejectionReason::Underage { age }));
        }

        let Some(client) = self.clients.find_by_id(client_id)? else {
            tracing::warn!(client_id = %client_id, "Registration references unknown client");
            return Ok(rejected(RejectionReason::UnknownClient(client_id)));
        };

        let credit_limit = rules::credit_limit_for(client.category, || {
            self.credit.credit_limit(last_name, date_of_birth)
        })?;

        let user = NewUser {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            date_of_birth,
        }
        .with_credit(client, credit_limit);

        if let Some(limit) = rules::insufficient_credit(user.credit_limit) {
            return Ok(rejected(RejectionReason::InsufficientCredit { limit }));
        }

        tracing::info!(
            client_id = %user.client.id,
            category = %user.client.category,
            credit_limit = %credit_limit,
            "Registering user"
        );
        self.users.store(user)?;

        Ok(RegistrationDecision::Accepted { credit_limit })
    }
}

fn rejected(reason: RejectionReason) -> RegistrationDecision {
    tracing::debug!(reason = %reason, "Registration rejected");
    RegistrationDecision::Rejected(reason)
}
