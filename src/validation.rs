// SPDX-License-Identifier: MPL-2.0
//! Submit-time password confirmation checks.
//!
//! These checks run before a form submission is accepted. Forms without a
//! confirmation field never call them, so "no check applies" needs no
//! representation here.

/// Message key shown when sign-up passwords disagree.
pub const PASSWORD_MISMATCH_KEY: &str = "toast-password-mismatch";

/// Message key shown when a profile's new passwords disagree.
pub const NEW_PASSWORD_MISMATCH_KEY: &str = "toast-new-password-mismatch";

/// Outcome of a submit-time check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitCheck {
    /// Submission may proceed.
    Allow,
    /// Submission is blocked; the key resolves to the user-facing message.
    Block { message_key: &'static str },
}

impl SubmitCheck {
    /// Returns `true` when the submission may proceed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, SubmitCheck::Allow)
    }
}

/// Sign-up rule: both password fields must hold the same value.
#[must_use]
pub fn confirm_passwords(password: &str, confirm_password: &str) -> SubmitCheck {
    if password == confirm_password {
        SubmitCheck::Allow
    } else {
        SubmitCheck::Block {
            message_key: PASSWORD_MISMATCH_KEY,
        }
    }
}

/// Edit-profile rule: an empty new password means "no password change
/// requested", so the confirmation field is ignored entirely.
#[must_use]
pub fn confirm_new_password(new_password: &str, confirm_password: &str) -> SubmitCheck {
    if new_password.is_empty() {
        return SubmitCheck::Allow;
    }

    if new_password == confirm_password {
        SubmitCheck::Allow
    } else {
        SubmitCheck::Block {
            message_key: NEW_PASSWORD_MISMATCH_KEY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_passwords_are_allowed() {
        assert!(confirm_passwords("hunter2", "hunter2").is_allowed());
    }

    #[test]
    fn mismatched_passwords_are_blocked_with_signup_message() {
        let check = confirm_passwords("a", "b");
        assert_eq!(
            check,
            SubmitCheck::Block {
                message_key: PASSWORD_MISMATCH_KEY
            }
        );
    }

    #[test]
    fn empty_pair_counts_as_matching() {
        // A form with both fields blank submits; presence validation is the
        // server's concern, not the guard's.
        assert!(confirm_passwords("", "").is_allowed());
    }

    #[test]
    fn empty_new_password_skips_the_check() {
        assert!(confirm_new_password("", "anything").is_allowed());
        assert!(confirm_new_password("", "").is_allowed());
    }

    #[test]
    fn mismatched_new_passwords_are_blocked_with_profile_message() {
        let check = confirm_new_password("secret1", "secret2");
        assert_eq!(
            check,
            SubmitCheck::Block {
                message_key: NEW_PASSWORD_MISMATCH_KEY
            }
        );
    }

    #[test]
    fn matching_new_passwords_are_allowed() {
        assert!(confirm_new_password("secret1", "secret1").is_allowed());
    }
}
