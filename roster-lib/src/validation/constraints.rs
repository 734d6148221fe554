//! Constraint table for the user form.

use email_address::EmailAddress;

use super::UserForm;
use crate::model::Gender;

pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const AGE: &str = "age";
pub const GENDER: &str = "gender";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";

/// Youngest age accepted for a local user.
pub const MIN_AGE: u32 = 18;

/// Oldest age accepted for a local user.
pub const MAX_AGE: u32 = 150;

/// One row of the constraint table.
#[derive(Debug, Clone, Copy)]
pub struct Constraint {
    /// Field the message is shown under.
    pub field: &'static str,
    /// Returns `true` when the form satisfies the constraint.
    pub check: fn(&UserForm) -> bool,
    /// Message shown when `check` fails.
    pub message: &'static str,
}

/// Constraints applied to [`UserForm`], in form order.
pub const USER_CONSTRAINTS: &[Constraint] = &[
    Constraint {
        field: FIRST_NAME,
        check: first_name_present,
        message: "First name is required",
    },
    Constraint {
        field: LAST_NAME,
        check: last_name_present,
        message: "Last name is required",
    },
    Constraint {
        field: AGE,
        check: age_is_integer,
        message: "Age must be a whole number",
    },
    Constraint {
        field: AGE,
        check: age_at_least_min,
        message: "Age must be at least 18",
    },
    Constraint {
        field: AGE,
        check: age_at_most_max,
        message: "Age must be less than 150",
    },
    Constraint {
        field: GENDER,
        check: gender_known,
        message: "Invalid gender",
    },
    Constraint {
        field: EMAIL,
        check: email_valid,
        message: "Invalid email address",
    },
];

fn first_name_present(form: &UserForm) -> bool {
    !form.first_name.trim().is_empty()
}

fn last_name_present(form: &UserForm) -> bool {
    !form.last_name.trim().is_empty()
}

fn age_is_integer(form: &UserForm) -> bool {
    form.parsed_age().is_some()
}

// Unparseable ages are reported by `age_is_integer`.
fn age_at_least_min(form: &UserForm) -> bool {
    form.parsed_age().is_none_or(|age| age >= i64::from(MIN_AGE))
}

fn age_at_most_max(form: &UserForm) -> bool {
    form.parsed_age().is_none_or(|age| age <= i64::from(MAX_AGE))
}

fn gender_known(form: &UserForm) -> bool {
    form.gender.parse::<Gender>().is_ok()
}

fn email_valid(form: &UserForm) -> bool {
    EmailAddress::is_valid(form.email.trim())
}
