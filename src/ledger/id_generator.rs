//! Sequential employee id generation.

use crate::config::EmployeeIdScheme;
use crate::models::EmployeeId;

/// Hands out sequential employee ids of the form `{prefix}{number}`.
///
/// Each ledger owns its own generator, so ids are unique per ledger and
/// deterministic for a given configuration.
///
/// # Example
///
/// ```
/// use payroll_engine::config::EmployeeIdScheme;
/// use payroll_engine::ledger::EmployeeIdGenerator;
///
/// let mut ids = EmployeeIdGenerator::new(&EmployeeIdScheme::default());
/// assert_eq!(ids.next_id().as_str(), "EMP1001");
/// assert_eq!(ids.next_id().as_str(), "EMP1002");
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeIdGenerator {
    prefix: String,
    next_number: u64,
}

impl EmployeeIdGenerator {
    /// Creates a generator starting at the scheme's first number.
    pub fn new(scheme: &EmployeeIdScheme) -> Self {
        Self {
            prefix: scheme.prefix.clone(),
            next_number: u64::from(scheme.first_number),
        }
    }

    /// Returns the next id.
    pub fn next_id(&mut self) -> EmployeeId {
        let id = EmployeeId::new(format!("{}{}", self.prefix, self.next_number));
        self.next_number += 1;
        id
    }
}
