use thiserror::Error as ThisError;

// Module: entities::status
// Responsibility: the wire-spelled lifecycle vocabulary shared by the
// catalogue. `EntityStatus` is what the service reports; `StatusAction` is
// what callers may request; `ApprovalType` governs how new credentials are
// granted on a product.

///
/// ParseEnumError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown {name} value `{value}`")]
pub struct ParseEnumError {
    pub name: &'static str,
    pub value: String,
}

wire_enum! {
    ///
    /// EntityStatus
    ///
    EntityStatus("status") {
        Approved => "approved",
        Pending => "pending",
        Revoked => "revoked",
    }
}

wire_enum! {
    ///
    /// StatusAction
    ///
    StatusAction("action") {
        Approve => "approve",
        Revoke => "revoke",
    }
}

wire_enum! {
    ///
    /// ApprovalType
    ///
    ApprovalType("approval_type") {
        Auto => "auto",
        Manual => "manual",
    }
}

///
/// TESTS
///
