use crate::errors::{ModelError, ValidationError};
use crate::model::{require, require_valid, ApiEnum, Builder, Model, Nullable, RawFields, Validate};
use crate::models::common::SortOrder;
use crate::{impl_model_serde, wire_enum};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

wire_enum! {
    pub enum FundingDirection {
        Deposit => "deposit",
        Withdrawal => "withdrawal",
    }
}

wire_enum! {
    /// What produced the movement of funds.
    pub enum FundingEventType {
        ChargeDeposit => "charge_deposit",
        ChargeReversal => "charge_reversal",
        PayoutReturn => "payout_return",
        PayoutWithdrawal => "payout_withdrawal",
    }
}

/// A settlement batch moving funds to or from the platform's bank account.
#[derive(Debug, Clone, PartialEq)]
pub struct FundingEvent {
    id: Option<String>,
    amount: Option<i64>,
    direction: Option<ApiEnum<FundingDirection>>,
    event_type: Option<ApiEnum<FundingEventType>>,
    payment_count: Option<i64>,
    trace_number: Nullable<String>,
    trace_numbers: Option<Vec<String>>,
    transfer_date: Option<NaiveDate>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    raw: RawFields,
}

impl Model for FundingEvent {
    const NAME: &'static str = "FundingEvent";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            id: raw.field(Self::NAME, "id")?,
            amount: raw.field(Self::NAME, "amount")?,
            direction: raw.field(Self::NAME, "direction")?,
            event_type: raw.field(Self::NAME, "event_type")?,
            payment_count: raw.field(Self::NAME, "payment_count")?,
            trace_number: raw.nullable(Self::NAME, "trace_number")?,
            trace_numbers: raw.field(Self::NAME, "trace_numbers")?,
            transfer_date: raw.field(Self::NAME, "transfer_date")?,
            created_at: raw.field(Self::NAME, "created_at")?,
            updated_at: raw.field(Self::NAME, "updated_at")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for FundingEvent {
    fn validate(&self) -> Result<(), ValidationError> {
        require("id", &self.id)?;
        require("amount", &self.amount)?;
        require_valid("direction", &self.direction)?;
        require_valid("event_type", &self.event_type)?;
        require("payment_count", &self.payment_count)?;
        require("transfer_date", &self.transfer_date)?;
        require("created_at", &self.created_at)?;
        require("updated_at", &self.updated_at)?;
        Ok(())
    }
}

impl FundingEvent {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Net amount in cents.
    pub fn amount(&self) -> Option<i64> {
        self.amount
    }

    pub fn direction(&self) -> Option<&ApiEnum<FundingDirection>> {
        self.direction.as_ref()
    }

    pub fn event_type(&self) -> Option<&ApiEnum<FundingEventType>> {
        self.event_type.as_ref()
    }

    pub fn payment_count(&self) -> Option<i64> {
        self.payment_count
    }

    pub fn trace_number(&self) -> Nullable<&str> {
        self.trace_number.as_ref().map(String::as_str)
    }

    pub fn trace_numbers(&self) -> Option<&[String]> {
        self.trace_numbers.as_deref()
    }

    pub fn transfer_date(&self) -> Option<NaiveDate> {
        self.transfer_date
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Builder<FundingEvent> {
    pub fn id(self, id: impl Into<String>) -> Self {
        self.set("id", &id.into())
    }

    pub fn amount(self, amount: i64) -> Self {
        self.set("amount", &amount)
    }

    pub fn direction(self, direction: impl Into<ApiEnum<FundingDirection>>) -> Self {
        self.set("direction", &direction.into())
    }

    pub fn event_type(self, event_type: impl Into<ApiEnum<FundingEventType>>) -> Self {
        self.set("event_type", &event_type.into())
    }

    pub fn payment_count(self, payment_count: i64) -> Self {
        self.set("payment_count", &payment_count)
    }

    pub fn trace_number(self, trace_number: impl Into<Option<String>>) -> Self {
        self.set_nullable("trace_number", trace_number.into())
    }

    pub fn trace_numbers(self, trace_numbers: impl Into<Option<Vec<String>>>) -> Self {
        self.set_optional("trace_numbers", trace_numbers.into())
    }

    pub fn transfer_date(self, transfer_date: NaiveDate) -> Self {
        self.set("transfer_date", &transfer_date)
    }

    pub fn created_at(self, created_at: DateTime<Utc>) -> Self {
        self.set("created_at", &created_at)
    }

    pub fn updated_at(self, updated_at: DateTime<Utc>) -> Self {
        self.set("updated_at", &updated_at)
    }
}

/// Query of `GET /v1/funding_events`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FundingEventListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<ApiEnum<FundingDirection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<ApiEnum<FundingEventType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<ApiEnum<SortOrder>>,
}

impl_model_serde!(FundingEvent);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_funding_event_trace_fields() {
        let event = FundingEvent::from_json(json!({
            "id": "fe_1",
            "amount": -2500,
            "direction": "withdrawal",
            "event_type": "payout_withdrawal",
            "payment_count": 3,
            "trace_number": null,
            "trace_numbers": ["021000021234567", "021000021234568"],
            "transfer_date": "2024-07-02",
            "created_at": "2024-07-01T22:00:00Z",
            "updated_at": "2024-07-02T06:00:00Z"
        }))
        .unwrap();

        assert!(event.trace_number().is_null());
        assert_eq!(event.trace_numbers().map(<[String]>::len), Some(2));
        assert_eq!(event.amount(), Some(-2500));
        assert!(event.validate().is_ok());
    }

    #[test]
    fn test_trace_numbers_unset_leaves_key_absent() {
        let event = FundingEvent::builder()
            .id("fe_2")
            .trace_numbers(None)
            .build()
            .unwrap();
        assert!(!event.has_field("trace_numbers"));
        assert!(event.trace_numbers().is_none());
    }
}
