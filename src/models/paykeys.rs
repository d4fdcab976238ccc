use crate::errors::{ModelError, ValidationError};
use crate::model::{
    check, require, require_valid, ApiEnum, Builder, Model, Nullable, RawFields, Validate,
};
use crate::models::common::{Metadata, SortOrder, StatusDetails};
use crate::models::customers::{ReviewDecision, VerificationResult};
use crate::{impl_model_serde, wire_enum};
use chrono::{DateTime, Utc};
use serde::Serialize;

wire_enum! {
    pub enum PaykeyStatus {
        Pending => "pending",
        Active => "active",
        Inactive => "inactive",
        Rejected => "rejected",
        Review => "review",
        Blocked => "blocked",
    }
}

wire_enum! {
    /// How the bank account behind a paykey was linked.
    pub enum PaykeySource {
        BankAccount => "bank_account",
        Straddle => "straddle",
        Mx => "mx",
        Plaid => "plaid",
        Tan => "tan",
        Quiltt => "quiltt",
    }
}

wire_enum! {
    pub enum AccountType {
        Checking => "checking",
        Savings => "savings",
    }
}

wire_enum! {
    pub enum BalanceStatus {
        Pending => "pending",
        Completed => "completed",
        Failed => "failed",
    }
}

/// Masked bank account behind a paykey.
#[derive(Debug, Clone, PartialEq)]
pub struct BankData {
    account_number: Option<String>,
    account_type: Option<ApiEnum<AccountType>>,
    routing_number: Option<String>,
    raw: RawFields,
}

impl Model for BankData {
    const NAME: &'static str = "BankData";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            account_number: raw.field(Self::NAME, "account_number")?,
            account_type: raw.field(Self::NAME, "account_type")?,
            routing_number: raw.field(Self::NAME, "routing_number")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for BankData {
    fn validate(&self) -> Result<(), ValidationError> {
        require("account_number", &self.account_number)?;
        require_valid("account_type", &self.account_type)?;
        require("routing_number", &self.routing_number)?;
        Ok(())
    }
}

impl BankData {
    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }

    pub fn account_type(&self) -> Option<&ApiEnum<AccountType>> {
        self.account_type.as_ref()
    }

    pub fn routing_number(&self) -> Option<&str> {
        self.routing_number.as_deref()
    }
}

impl Builder<BankData> {
    pub fn account_number(self, account_number: impl Into<String>) -> Self {
        self.set("account_number", &account_number.into())
    }

    pub fn account_type(self, account_type: impl Into<ApiEnum<AccountType>>) -> Self {
        self.set("account_type", &account_type.into())
    }

    pub fn routing_number(self, routing_number: impl Into<String>) -> Self {
        self.set("routing_number", &routing_number.into())
    }
}

/// Last balance check of the linked account, amounts in cents.
#[derive(Debug, Clone, PartialEq)]
pub struct PaykeyBalance {
    status: Option<ApiEnum<BalanceStatus>>,
    account_balance: Nullable<i64>,
    updated_at: Nullable<DateTime<Utc>>,
    raw: RawFields,
}

impl Model for PaykeyBalance {
    const NAME: &'static str = "PaykeyBalance";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            status: raw.field(Self::NAME, "status")?,
            account_balance: raw.nullable(Self::NAME, "account_balance")?,
            updated_at: raw.nullable(Self::NAME, "updated_at")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for PaykeyBalance {
    fn validate(&self) -> Result<(), ValidationError> {
        require_valid("status", &self.status)
    }
}

impl PaykeyBalance {
    pub fn status(&self) -> Option<&ApiEnum<BalanceStatus>> {
        self.status.as_ref()
    }

    pub fn account_balance(&self) -> Nullable<i64> {
        self.account_balance.clone()
    }

    pub fn updated_at(&self) -> Nullable<DateTime<Utc>> {
        self.updated_at.clone()
    }
}

impl Builder<PaykeyBalance> {
    pub fn status(self, status: impl Into<ApiEnum<BalanceStatus>>) -> Self {
        self.set("status", &status.into())
    }

    pub fn account_balance(self, balance: impl Into<Option<i64>>) -> Self {
        self.set_nullable("account_balance", balance.into())
    }

    pub fn updated_at(self, updated_at: impl Into<Option<DateTime<Utc>>>) -> Self {
        self.set_nullable("updated_at", updated_at.into())
    }
}

/// Token standing in for a verified customer bank account.
#[derive(Debug, Clone, PartialEq)]
pub struct Paykey {
    id: Option<String>,
    paykey: Option<String>,
    customer_id: Option<String>,
    label: Option<String>,
    source: Option<ApiEnum<PaykeySource>>,
    status: Option<ApiEnum<PaykeyStatus>>,
    institution_name: Nullable<String>,
    bank_data: Option<BankData>,
    balance: Nullable<PaykeyBalance>,
    status_details: Option<StatusDetails>,
    external_id: Nullable<String>,
    metadata: Nullable<Metadata>,
    expires_at: Nullable<DateTime<Utc>>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    raw: RawFields,
}

impl Model for Paykey {
    const NAME: &'static str = "Paykey";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            id: raw.field(Self::NAME, "id")?,
            paykey: raw.field(Self::NAME, "paykey")?,
            customer_id: raw.field(Self::NAME, "customer_id")?,
            label: raw.field(Self::NAME, "label")?,
            source: raw.field(Self::NAME, "source")?,
            status: raw.field(Self::NAME, "status")?,
            institution_name: raw.nullable(Self::NAME, "institution_name")?,
            bank_data: raw.field(Self::NAME, "bank_data")?,
            balance: raw.nullable(Self::NAME, "balance")?,
            status_details: raw.field(Self::NAME, "status_details")?,
            external_id: raw.nullable(Self::NAME, "external_id")?,
            metadata: raw.nullable(Self::NAME, "metadata")?,
            expires_at: raw.nullable(Self::NAME, "expires_at")?,
            created_at: raw.field(Self::NAME, "created_at")?,
            updated_at: raw.field(Self::NAME, "updated_at")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for Paykey {
    fn validate(&self) -> Result<(), ValidationError> {
        require("id", &self.id)?;
        require("paykey", &self.paykey)?;
        require("customer_id", &self.customer_id)?;
        require("label", &self.label)?;
        require_valid("source", &self.source)?;
        require_valid("status", &self.status)?;
        check("bank_data", &self.bank_data)?;
        check("balance", &self.balance)?;
        check("status_details", &self.status_details)?;
        require("created_at", &self.created_at)?;
        require("updated_at", &self.updated_at)?;
        Ok(())
    }
}

impl Paykey {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The token used as `paykey` when creating charges and payouts.
    pub fn paykey(&self) -> Option<&str> {
        self.paykey.as_deref()
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn source(&self) -> Option<&ApiEnum<PaykeySource>> {
        self.source.as_ref()
    }

    pub fn status(&self) -> Option<&ApiEnum<PaykeyStatus>> {
        self.status.as_ref()
    }

    pub fn institution_name(&self) -> Nullable<&str> {
        self.institution_name.as_ref().map(String::as_str)
    }

    pub fn bank_data(&self) -> Option<&BankData> {
        self.bank_data.as_ref()
    }

    pub fn balance(&self) -> Nullable<&PaykeyBalance> {
        self.balance.as_ref()
    }

    pub fn status_details(&self) -> Option<&StatusDetails> {
        self.status_details.as_ref()
    }

    pub fn external_id(&self) -> Nullable<&str> {
        self.external_id.as_ref().map(String::as_str)
    }

    pub fn metadata(&self) -> Nullable<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn expires_at(&self) -> Nullable<DateTime<Utc>> {
        self.expires_at.clone()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Builder<Paykey> {
    pub fn id(self, id: impl Into<String>) -> Self {
        self.set("id", &id.into())
    }

    pub fn paykey(self, paykey: impl Into<String>) -> Self {
        self.set("paykey", &paykey.into())
    }

    pub fn customer_id(self, customer_id: impl Into<String>) -> Self {
        self.set("customer_id", &customer_id.into())
    }

    pub fn label(self, label: impl Into<String>) -> Self {
        self.set("label", &label.into())
    }

    pub fn source(self, source: impl Into<ApiEnum<PaykeySource>>) -> Self {
        self.set("source", &source.into())
    }

    pub fn status(self, status: impl Into<ApiEnum<PaykeyStatus>>) -> Self {
        self.set("status", &status.into())
    }

    pub fn institution_name(self, name: impl Into<Option<String>>) -> Self {
        self.set_nullable("institution_name", name.into())
    }

    pub fn bank_data(self, bank_data: impl Into<Option<BankData>>) -> Self {
        self.set_optional("bank_data", bank_data.into())
    }

    pub fn balance(self, balance: impl Into<Option<PaykeyBalance>>) -> Self {
        self.set_nullable("balance", balance.into())
    }

    pub fn status_details(self, details: impl Into<Option<StatusDetails>>) -> Self {
        self.set_optional("status_details", details.into())
    }

    pub fn external_id(self, external_id: impl Into<Option<String>>) -> Self {
        self.set_nullable("external_id", external_id.into())
    }

    pub fn metadata(self, metadata: impl Into<Option<Metadata>>) -> Self {
        self.set_nullable("metadata", metadata.into())
    }

    pub fn expires_at(self, expires_at: impl Into<Option<DateTime<Utc>>>) -> Self {
        self.set_nullable("expires_at", expires_at.into())
    }

    pub fn created_at(self, created_at: DateTime<Utc>) -> Self {
        self.set("created_at", &created_at)
    }

    pub fn updated_at(self, updated_at: DateTime<Utc>) -> Self {
        self.set("updated_at", &updated_at)
    }
}

/// Per-check results of a paykey review.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationBreakdown {
    account_validation: Option<VerificationResult>,
    name_match: Option<VerificationResult>,
    raw: RawFields,
}

impl Model for VerificationBreakdown {
    const NAME: &'static str = "VerificationBreakdown";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            account_validation: raw.field(Self::NAME, "account_validation")?,
            name_match: raw.field(Self::NAME, "name_match")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for VerificationBreakdown {
    fn validate(&self) -> Result<(), ValidationError> {
        check("account_validation", &self.account_validation)?;
        check("name_match", &self.name_match)
    }
}

impl VerificationBreakdown {
    pub fn account_validation(&self) -> Option<&VerificationResult> {
        self.account_validation.as_ref()
    }

    pub fn name_match(&self) -> Option<&VerificationResult> {
        self.name_match.as_ref()
    }
}

impl Builder<VerificationBreakdown> {
    pub fn account_validation(self, result: impl Into<Option<VerificationResult>>) -> Self {
        self.set_optional("account_validation", result.into())
    }

    pub fn name_match(self, result: impl Into<Option<VerificationResult>>) -> Self {
        self.set_optional("name_match", result.into())
    }
}

/// Outcome of bank account verification for a paykey.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationDetails {
    id: Option<String>,
    decision: Option<ApiEnum<ReviewDecision>>,
    breakdown: Option<VerificationBreakdown>,
    messages: Nullable<Metadata>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    raw: RawFields,
}

impl Model for VerificationDetails {
    const NAME: &'static str = "VerificationDetails";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            id: raw.field(Self::NAME, "id")?,
            decision: raw.field(Self::NAME, "decision")?,
            breakdown: raw.field(Self::NAME, "breakdown")?,
            messages: raw.nullable(Self::NAME, "messages")?,
            created_at: raw.field(Self::NAME, "created_at")?,
            updated_at: raw.field(Self::NAME, "updated_at")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for VerificationDetails {
    fn validate(&self) -> Result<(), ValidationError> {
        require("id", &self.id)?;
        require_valid("decision", &self.decision)?;
        require_valid("breakdown", &self.breakdown)?;
        require("created_at", &self.created_at)?;
        require("updated_at", &self.updated_at)?;
        Ok(())
    }
}

impl VerificationDetails {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn decision(&self) -> Option<&ApiEnum<ReviewDecision>> {
        self.decision.as_ref()
    }

    pub fn breakdown(&self) -> Option<&VerificationBreakdown> {
        self.breakdown.as_ref()
    }

    pub fn messages(&self) -> Nullable<&Metadata> {
        self.messages.as_ref()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Builder<VerificationDetails> {
    pub fn id(self, id: impl Into<String>) -> Self {
        self.set("id", &id.into())
    }

    pub fn decision(self, decision: impl Into<ApiEnum<ReviewDecision>>) -> Self {
        self.set("decision", &decision.into())
    }

    pub fn breakdown(self, breakdown: VerificationBreakdown) -> Self {
        self.set("breakdown", &breakdown)
    }

    pub fn messages(self, messages: impl Into<Option<Metadata>>) -> Self {
        self.set_nullable("messages", messages.into())
    }

    pub fn created_at(self, created_at: DateTime<Utc>) -> Self {
        self.set("created_at", &created_at)
    }

    pub fn updated_at(self, updated_at: DateTime<Utc>) -> Self {
        self.set("updated_at", &updated_at)
    }
}

/// Response of `GET /v1/paykeys/{id}/review`.
#[derive(Debug, Clone, PartialEq)]
pub struct PaykeyReview {
    paykey_details: Option<Paykey>,
    verification_details: Nullable<VerificationDetails>,
    raw: RawFields,
}

impl Model for PaykeyReview {
    const NAME: &'static str = "PaykeyReview";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            paykey_details: raw.field(Self::NAME, "paykey_details")?,
            verification_details: raw.nullable(Self::NAME, "verification_details")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for PaykeyReview {
    fn validate(&self) -> Result<(), ValidationError> {
        require_valid("paykey_details", &self.paykey_details)?;
        check("verification_details", &self.verification_details)
    }
}

impl PaykeyReview {
    pub fn paykey_details(&self) -> Option<&Paykey> {
        self.paykey_details.as_ref()
    }

    pub fn verification_details(&self) -> Nullable<&VerificationDetails> {
        self.verification_details.as_ref()
    }
}

impl Builder<PaykeyReview> {
    pub fn paykey_details(self, paykey: Paykey) -> Self {
        self.set("paykey_details", &paykey)
    }

    pub fn verification_details(self, details: impl Into<Option<VerificationDetails>>) -> Self {
        self.set_nullable("verification_details", details.into())
    }
}

/// Query of `GET /v1/paykeys`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PaykeyListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApiEnum<PaykeyStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<ApiEnum<SortOrder>>,
}

impl_model_serde!(
    BankData,
    PaykeyBalance,
    Paykey,
    VerificationBreakdown,
    VerificationDetails,
    PaykeyReview,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationErrorKind;
    use serde_json::json;

    #[test]
    fn test_balance_status_unknown_value() {
        let balance = PaykeyBalance::from_json(json!({"status": "some_future_status"})).unwrap();
        assert_eq!(balance.status().map(|s| s.as_str()), Some("some_future_status"));

        let err = balance.validate().unwrap_err();
        assert_eq!(err.path(), "status");
        assert!(matches!(
            err.kind(),
            ValidationErrorKind::InvalidEnumValue { value, .. } if value == "some_future_status"
        ));
    }

    #[test]
    fn test_nested_paykey_validation_path() {
        let review = PaykeyReview::from_json(json!({
            "paykey_details": {
                "id": "pk_1",
                "paykey": "tok",
                "customer_id": "cus_1",
                "label": "Checking ****1234",
                "source": "bank_account",
                "status": "active",
                "bank_data": {
                    "account_number": "****1234",
                    "account_type": "brokerage",
                    "routing_number": "021000021"
                },
                "created_at": "2024-05-01T12:00:00Z",
                "updated_at": "2024-05-01T12:00:00Z"
            },
            "verification_details": null
        }))
        .unwrap();

        assert!(review.verification_details().is_null());
        let err = review.validate().unwrap_err();
        assert_eq!(err.path(), "paykey_details.bank_data.account_type");
    }

    #[test]
    fn test_list_params_skip_unset() {
        let params = PaykeyListParams {
            customer_id: Some("cus_1".to_string()),
            status: Some(PaykeyStatus::Active.into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"customer_id": "cus_1", "status": "active"})
        );
    }
}
