/// Mode flag for the register-or-update operation. A closed enum instead of
/// a free-form string so an invalid mode cannot reach the use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Register,
    Update,
}
