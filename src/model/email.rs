use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Why a verification code is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CodePurposeDto {
    /// Confirming an address before registration.
    Register,
    /// Password recovery for an existing account.
    Recover,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendCodeDto {
    pub email: String,
    pub purpose: CodePurposeDto,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyCodeDto {
    pub email: String,
    pub code: String,
}
