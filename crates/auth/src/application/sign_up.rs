//! Sign Up Use Case
//!
//! Creates a new member account.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::entity::member::Member;
use crate::domain::repository::MemberRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub nickname: String,
}

/// Sign up use case
pub struct SignUpUseCase<M>
where
    M: MemberRepository,
{
    member_repo: Arc<M>,
}

impl<M> SignUpUseCase<M>
where
    M: MemberRepository,
{
    pub fn new(member_repo: Arc<M>) -> Self {
        Self { member_repo }
    }

    /// Returns the created member; the caller serializes it without the hash.
    pub async fn execute(&self, input: SignUpInput) -> AuthResult<Member> {
        let email = Email::new(input.email)?;

        let password = ClearTextPassword::new(input.password)?;

        // Advisory duplicate check before the expensive hash; the store's
        // unique constraint is the backstop against a concurrent signup.
        if self.member_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = password.hash()?;

        let member = Member::new(email, password_hash, input.nickname);

        self.member_repo.create(&member).await?;

        tracing::info!(
            member_id = %member.member_id,
            "Member signed up"
        );

        Ok(member)
    }
}
