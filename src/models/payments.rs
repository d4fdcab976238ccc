use crate::errors::{ModelError, ValidationError};
use crate::model::{
    check, require, require_valid, ApiEnum, Builder, Model, Nullable, RawFields, Validate,
};
use crate::models::common::{Device, Metadata, SortOrder, StatusDetails};
use crate::{impl_model_serde, wire_enum};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

wire_enum! {
    /// Lifecycle status shared by charges and payouts.
    pub enum PaymentStatus {
        Created => "created",
        Scheduled => "scheduled",
        Failed => "failed",
        Cancelled => "cancelled",
        OnHold => "on_hold",
        Pending => "pending",
        Paid => "paid",
        Reversed => "reversed",
        Validating => "validating",
    }
}

wire_enum! {
    pub enum ConsentType {
        Internet => "internet",
        Signed => "signed",
    }
}

wire_enum! {
    pub enum PaymentType {
        Charge => "charge",
        Payout => "payout",
    }
}

/// A pull of funds from a customer's account. Amounts are in cents.
#[derive(Debug, Clone, PartialEq)]
pub struct Charge {
    id: Option<String>,
    amount: Option<i64>,
    currency: Option<String>,
    description: Option<String>,
    paykey: Option<String>,
    payment_date: Option<NaiveDate>,
    consent_type: Option<ApiEnum<ConsentType>>,
    device: Option<Device>,
    external_id: Nullable<String>,
    status: Option<ApiEnum<PaymentStatus>>,
    status_details: Option<StatusDetails>,
    funding_id: Nullable<String>,
    metadata: Nullable<Metadata>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    raw: RawFields,
}

impl Model for Charge {
    const NAME: &'static str = "Charge";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            id: raw.field(Self::NAME, "id")?,
            amount: raw.field(Self::NAME, "amount")?,
            currency: raw.field(Self::NAME, "currency")?,
            description: raw.field(Self::NAME, "description")?,
            paykey: raw.field(Self::NAME, "paykey")?,
            payment_date: raw.field(Self::NAME, "payment_date")?,
            consent_type: raw.field(Self::NAME, "consent_type")?,
            device: raw.field(Self::NAME, "device")?,
            external_id: raw.nullable(Self::NAME, "external_id")?,
            status: raw.field(Self::NAME, "status")?,
            status_details: raw.field(Self::NAME, "status_details")?,
            funding_id: raw.nullable(Self::NAME, "funding_id")?,
            metadata: raw.nullable(Self::NAME, "metadata")?,
            created_at: raw.field(Self::NAME, "created_at")?,
            updated_at: raw.field(Self::NAME, "updated_at")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for Charge {
    fn validate(&self) -> Result<(), ValidationError> {
        require("id", &self.id)?;
        require("amount", &self.amount)?;
        require("currency", &self.currency)?;
        require("description", &self.description)?;
        require("paykey", &self.paykey)?;
        require("payment_date", &self.payment_date)?;
        require_valid("consent_type", &self.consent_type)?;
        require_valid("device", &self.device)?;
        require_valid("status", &self.status)?;
        check("status_details", &self.status_details)?;
        require("created_at", &self.created_at)?;
        require("updated_at", &self.updated_at)?;
        Ok(())
    }
}

impl Charge {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn amount(&self) -> Option<i64> {
        self.amount
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn paykey(&self) -> Option<&str> {
        self.paykey.as_deref()
    }

    pub fn payment_date(&self) -> Option<NaiveDate> {
        self.payment_date
    }

    pub fn consent_type(&self) -> Option<&ApiEnum<ConsentType>> {
        self.consent_type.as_ref()
    }

    pub fn device(&self) -> Option<&Device> {
        self.device.as_ref()
    }

    pub fn external_id(&self) -> Nullable<&str> {
        self.external_id.as_ref().map(String::as_str)
    }

    pub fn status(&self) -> Option<&ApiEnum<PaymentStatus>> {
        self.status.as_ref()
    }

    pub fn status_details(&self) -> Option<&StatusDetails> {
        self.status_details.as_ref()
    }

    pub fn funding_id(&self) -> Nullable<&str> {
        self.funding_id.as_ref().map(String::as_str)
    }

    pub fn metadata(&self) -> Nullable<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Builder<Charge> {
    pub fn id(self, id: impl Into<String>) -> Self {
        self.set("id", &id.into())
    }

    pub fn amount(self, amount: i64) -> Self {
        self.set("amount", &amount)
    }

    pub fn currency(self, currency: impl Into<String>) -> Self {
        self.set("currency", &currency.into())
    }

    pub fn description(self, description: impl Into<String>) -> Self {
        self.set("description", &description.into())
    }

    pub fn paykey(self, paykey: impl Into<String>) -> Self {
        self.set("paykey", &paykey.into())
    }

    pub fn payment_date(self, payment_date: NaiveDate) -> Self {
        self.set("payment_date", &payment_date)
    }

    pub fn consent_type(self, consent_type: impl Into<ApiEnum<ConsentType>>) -> Self {
        self.set("consent_type", &consent_type.into())
    }

    pub fn device(self, device: Device) -> Self {
        self.set("device", &device)
    }

    pub fn external_id(self, external_id: impl Into<Option<String>>) -> Self {
        self.set_nullable("external_id", external_id.into())
    }

    pub fn status(self, status: impl Into<ApiEnum<PaymentStatus>>) -> Self {
        self.set("status", &status.into())
    }

    pub fn status_details(self, details: impl Into<Option<StatusDetails>>) -> Self {
        self.set_optional("status_details", details.into())
    }

    pub fn funding_id(self, funding_id: impl Into<Option<String>>) -> Self {
        self.set_nullable("funding_id", funding_id.into())
    }

    pub fn metadata(self, metadata: impl Into<Option<Metadata>>) -> Self {
        self.set_nullable("metadata", metadata.into())
    }

    pub fn created_at(self, created_at: DateTime<Utc>) -> Self {
        self.set("created_at", &created_at)
    }

    pub fn updated_at(self, updated_at: DateTime<Utc>) -> Self {
        self.set("updated_at", &updated_at)
    }
}

/// Body of `POST /v1/charges`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeCreateParams {
    amount: Option<i64>,
    currency: Option<String>,
    description: Option<String>,
    paykey: Option<String>,
    payment_date: Option<NaiveDate>,
    consent_type: Option<ApiEnum<ConsentType>>,
    device: Option<Device>,
    external_id: Nullable<String>,
    metadata: Nullable<Metadata>,
    raw: RawFields,
}

impl Model for ChargeCreateParams {
    const NAME: &'static str = "ChargeCreateParams";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            amount: raw.field(Self::NAME, "amount")?,
            currency: raw.field(Self::NAME, "currency")?,
            description: raw.field(Self::NAME, "description")?,
            paykey: raw.field(Self::NAME, "paykey")?,
            payment_date: raw.field(Self::NAME, "payment_date")?,
            consent_type: raw.field(Self::NAME, "consent_type")?,
            device: raw.field(Self::NAME, "device")?,
            external_id: raw.nullable(Self::NAME, "external_id")?,
            metadata: raw.nullable(Self::NAME, "metadata")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for ChargeCreateParams {
    fn validate(&self) -> Result<(), ValidationError> {
        require("amount", &self.amount)?;
        require("currency", &self.currency)?;
        require("description", &self.description)?;
        require("paykey", &self.paykey)?;
        require("payment_date", &self.payment_date)?;
        require_valid("consent_type", &self.consent_type)?;
        require_valid("device", &self.device)
    }
}

impl ChargeCreateParams {
    pub fn amount(&self) -> Option<i64> {
        self.amount
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn paykey(&self) -> Option<&str> {
        self.paykey.as_deref()
    }

    pub fn payment_date(&self) -> Option<NaiveDate> {
        self.payment_date
    }

    pub fn consent_type(&self) -> Option<&ApiEnum<ConsentType>> {
        self.consent_type.as_ref()
    }

    pub fn device(&self) -> Option<&Device> {
        self.device.as_ref()
    }

    pub fn external_id(&self) -> Nullable<&str> {
        self.external_id.as_ref().map(String::as_str)
    }

    pub fn metadata(&self) -> Nullable<&Metadata> {
        self.metadata.as_ref()
    }
}

impl Builder<ChargeCreateParams> {
    pub fn amount(self, amount: i64) -> Self {
        self.set("amount", &amount)
    }

    pub fn currency(self, currency: impl Into<String>) -> Self {
        self.set("currency", &currency.into())
    }

    pub fn description(self, description: impl Into<String>) -> Self {
        self.set("description", &description.into())
    }

    pub fn paykey(self, paykey: impl Into<String>) -> Self {
        self.set("paykey", &paykey.into())
    }

    pub fn payment_date(self, payment_date: NaiveDate) -> Self {
        self.set("payment_date", &payment_date)
    }

    pub fn consent_type(self, consent_type: impl Into<ApiEnum<ConsentType>>) -> Self {
        self.set("consent_type", &consent_type.into())
    }

    pub fn device(self, device: Device) -> Self {
        self.set("device", &device)
    }

    pub fn external_id(self, external_id: impl Into<Option<String>>) -> Self {
        self.set_nullable("external_id", external_id.into())
    }

    pub fn metadata(self, metadata: impl Into<Option<Metadata>>) -> Self {
        self.set_nullable("metadata", metadata.into())
    }
}

/// A push of funds to a customer's account. Amounts are in cents.
#[derive(Debug, Clone, PartialEq)]
pub struct Payout {
    id: Option<String>,
    amount: Option<i64>,
    currency: Option<String>,
    description: Option<String>,
    paykey: Option<String>,
    payment_date: Option<NaiveDate>,
    device: Option<Device>,
    external_id: Nullable<String>,
    status: Option<ApiEnum<PaymentStatus>>,
    status_details: Option<StatusDetails>,
    funding_id: Nullable<String>,
    metadata: Nullable<Metadata>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    raw: RawFields,
}

impl Model for Payout {
    const NAME: &'static str = "Payout";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            id: raw.field(Self::NAME, "id")?,
            amount: raw.field(Self::NAME, "amount")?,
            currency: raw.field(Self::NAME, "currency")?,
            description: raw.field(Self::NAME, "description")?,
            paykey: raw.field(Self::NAME, "paykey")?,
            payment_date: raw.field(Self::NAME, "payment_date")?,
            device: raw.field(Self::NAME, "device")?,
            external_id: raw.nullable(Self::NAME, "external_id")?,
            status: raw.field(Self::NAME, "status")?,
            status_details: raw.field(Self::NAME, "status_details")?,
            funding_id: raw.nullable(Self::NAME, "funding_id")?,
            metadata: raw.nullable(Self::NAME, "metadata")?,
            created_at: raw.field(Self::NAME, "created_at")?,
            updated_at: raw.field(Self::NAME, "updated_at")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for Payout {
    fn validate(&self) -> Result<(), ValidationError> {
        require("id", &self.id)?;
        require("amount", &self.amount)?;
        require("currency", &self.currency)?;
        require("description", &self.description)?;
        require("paykey", &self.paykey)?;
        require("payment_date", &self.payment_date)?;
        require_valid("device", &self.device)?;
        require_valid("status", &self.status)?;
        check("status_details", &self.status_details)?;
        require("created_at", &self.created_at)?;
        require("updated_at", &self.updated_at)?;
        Ok(())
    }
}

impl Payout {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn amount(&self) -> Option<i64> {
        self.amount
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn paykey(&self) -> Option<&str> {
        self.paykey.as_deref()
    }

    pub fn payment_date(&self) -> Option<NaiveDate> {
        self.payment_date
    }

    pub fn device(&self) -> Option<&Device> {
        self.device.as_ref()
    }

    pub fn external_id(&self) -> Nullable<&str> {
        self.external_id.as_ref().map(String::as_str)
    }

    pub fn status(&self) -> Option<&ApiEnum<PaymentStatus>> {
        self.status.as_ref()
    }

    pub fn status_details(&self) -> Option<&StatusDetails> {
        self.status_details.as_ref()
    }

    pub fn funding_id(&self) -> Nullable<&str> {
        self.funding_id.as_ref().map(String::as_str)
    }

    pub fn metadata(&self) -> Nullable<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Builder<Payout> {
    pub fn id(self, id: impl Into<String>) -> Self {
        self.set("id", &id.into())
    }

    pub fn amount(self, amount: i64) -> Self {
        self.set("amount", &amount)
    }

    pub fn currency(self, currency: impl Into<String>) -> Self {
        self.set("currency", &currency.into())
    }

    pub fn description(self, description: impl Into<String>) -> Self {
        self.set("description", &description.into())
    }

    pub fn paykey(self, paykey: impl Into<String>) -> Self {
        self.set("paykey", &paykey.into())
    }

    pub fn payment_date(self, payment_date: NaiveDate) -> Self {
        self.set("payment_date", &payment_date)
    }

    pub fn device(self, device: Device) -> Self {
        self.set("device", &device)
    }

    pub fn external_id(self, external_id: impl Into<Option<String>>) -> Self {
        self.set_nullable("external_id", external_id.into())
    }

    pub fn status(self, status: impl Into<ApiEnum<PaymentStatus>>) -> Self {
        self.set("status", &status.into())
    }

    pub fn status_details(self, details: impl Into<Option<StatusDetails>>) -> Self {
        self.set_optional("status_details", details.into())
    }

    pub fn funding_id(self, funding_id: impl Into<Option<String>>) -> Self {
        self.set_nullable("funding_id", funding_id.into())
    }

    pub fn metadata(self, metadata: impl Into<Option<Metadata>>) -> Self {
        self.set_nullable("metadata", metadata.into())
    }

    pub fn created_at(self, created_at: DateTime<Utc>) -> Self {
        self.set("created_at", &created_at)
    }

    pub fn updated_at(self, updated_at: DateTime<Utc>) -> Self {
        self.set("updated_at", &updated_at)
    }
}

/// Body of `POST /v1/payouts`.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutCreateParams {
    amount: Option<i64>,
    currency: Option<String>,
    description: Option<String>,
    paykey: Option<String>,
    payment_date: Option<NaiveDate>,
    device: Option<Device>,
    external_id: Nullable<String>,
    metadata: Nullable<Metadata>,
    raw: RawFields,
}

impl Model for PayoutCreateParams {
    const NAME: &'static str = "PayoutCreateParams";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            amount: raw.field(Self::NAME, "amount")?,
            currency: raw.field(Self::NAME, "currency")?,
            description: raw.field(Self::NAME, "description")?,
            paykey: raw.field(Self::NAME, "paykey")?,
            payment_date: raw.field(Self::NAME, "payment_date")?,
            device: raw.field(Self::NAME, "device")?,
            external_id: raw.nullable(Self::NAME, "external_id")?,
            metadata: raw.nullable(Self::NAME, "metadata")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for PayoutCreateParams {
    fn validate(&self) -> Result<(), ValidationError> {
        require("amount", &self.amount)?;
        require("currency", &self.currency)?;
        require("description", &self.description)?;
        require("paykey", &self.paykey)?;
        require("payment_date", &self.payment_date)?;
        require_valid("device", &self.device)
    }
}

impl PayoutCreateParams {
    pub fn amount(&self) -> Option<i64> {
        self.amount
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn paykey(&self) -> Option<&str> {
        self.paykey.as_deref()
    }

    pub fn payment_date(&self) -> Option<NaiveDate> {
        self.payment_date
    }

    pub fn device(&self) -> Option<&Device> {
        self.device.as_ref()
    }

    pub fn external_id(&self) -> Nullable<&str> {
        self.external_id.as_ref().map(String::as_str)
    }

    pub fn metadata(&self) -> Nullable<&Metadata> {
        self.metadata.as_ref()
    }
}

impl Builder<PayoutCreateParams> {
    pub fn amount(self, amount: i64) -> Self {
        self.set("amount", &amount)
    }

    pub fn currency(self, currency: impl Into<String>) -> Self {
        self.set("currency", &currency.into())
    }

    pub fn description(self, description: impl Into<String>) -> Self {
        self.set("description", &description.into())
    }

    pub fn paykey(self, paykey: impl Into<String>) -> Self {
        self.set("paykey", &paykey.into())
    }

    pub fn payment_date(self, payment_date: NaiveDate) -> Self {
        self.set("payment_date", &payment_date)
    }

    pub fn device(self, device: Device) -> Self {
        self.set("device", &device)
    }

    pub fn external_id(self, external_id: impl Into<Option<String>>) -> Self {
        self.set_nullable("external_id", external_id.into())
    }

    pub fn metadata(self, metadata: impl Into<Option<Metadata>>) -> Self {
        self.set_nullable("metadata", metadata.into())
    }
}

/// Row of `GET /v1/payments`, covering both charges and payouts.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSummary {
    id: Option<String>,
    payment_type: Option<ApiEnum<PaymentType>>,
    amount: Option<i64>,
    currency: Option<String>,
    status: Option<ApiEnum<PaymentStatus>>,
    paykey: Option<String>,
    payment_date: Option<NaiveDate>,
    description: Nullable<String>,
    funding_id: Nullable<String>,
    external_id: Nullable<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    raw: RawFields,
}

impl Model for PaymentSummary {
    const NAME: &'static str = "PaymentSummary";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            id: raw.field(Self::NAME, "id")?,
            payment_type: raw.field(Self::NAME, "payment_type")?,
            amount: raw.field(Self::NAME, "amount")?,
            currency: raw.field(Self::NAME, "currency")?,
            status: raw.field(Self::NAME, "status")?,
            paykey: raw.field(Self::NAME, "paykey")?,
            payment_date: raw.field(Self::NAME, "payment_date")?,
            description: raw.nullable(Self::NAME, "description")?,
            funding_id: raw.nullable(Self::NAME, "funding_id")?,
            external_id: raw.nullable(Self::NAME, "external_id")?,
            created_at: raw.field(Self::NAME, "created_at")?,
            updated_at: raw.field(Self::NAME, "updated_at")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for PaymentSummary {
    fn validate(&self) -> Result<(), ValidationError> {
        require("id", &self.id)?;
        require_valid("payment_type", &self.payment_type)?;
        require("amount", &self.amount)?;
        require("currency", &self.currency)?;
        require_valid("status", &self.status)?;
        require("paykey", &self.paykey)?;
        require("payment_date", &self.payment_date)?;
        require("created_at", &self.created_at)?;
        require("updated_at", &self.updated_at)?;
        Ok(())
    }
}

impl PaymentSummary {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn payment_type(&self) -> Option<&ApiEnum<PaymentType>> {
        self.payment_type.as_ref()
    }

    pub fn amount(&self) -> Option<i64> {
        self.amount
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn status(&self) -> Option<&ApiEnum<PaymentStatus>> {
        self.status.as_ref()
    }

    pub fn paykey(&self) -> Option<&str> {
        self.paykey.as_deref()
    }

    pub fn payment_date(&self) -> Option<NaiveDate> {
        self.payment_date
    }

    pub fn description(&self) -> Nullable<&str> {
        self.description.as_ref().map(String::as_str)
    }

    pub fn funding_id(&self) -> Nullable<&str> {
        self.funding_id.as_ref().map(String::as_str)
    }

    pub fn external_id(&self) -> Nullable<&str> {
        self.external_id.as_ref().map(String::as_str)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Builder<PaymentSummary> {
    pub fn id(self, id: impl Into<String>) -> Self {
        self.set("id", &id.into())
    }

    pub fn payment_type(self, payment_type: impl Into<ApiEnum<PaymentType>>) -> Self {
        self.set("payment_type", &payment_type.into())
    }

    pub fn amount(self, amount: i64) -> Self {
        self.set("amount", &amount)
    }

    pub fn currency(self, currency: impl Into<String>) -> Self {
        self.set("currency", &currency.into())
    }

    pub fn status(self, status: impl Into<ApiEnum<PaymentStatus>>) -> Self {
        self.set("status", &status.into())
    }

    pub fn paykey(self, paykey: impl Into<String>) -> Self {
        self.set("paykey", &paykey.into())
    }

    pub fn payment_date(self, payment_date: NaiveDate) -> Self {
        self.set("payment_date", &payment_date)
    }

    pub fn description(self, description: impl Into<Option<String>>) -> Self {
        self.set_nullable("description", description.into())
    }

    pub fn funding_id(self, funding_id: impl Into<Option<String>>) -> Self {
        self.set_nullable("funding_id", funding_id.into())
    }

    pub fn external_id(self, external_id: impl Into<Option<String>>) -> Self {
        self.set_nullable("external_id", external_id.into())
    }

    pub fn created_at(self, created_at: DateTime<Utc>) -> Self {
        self.set("created_at", &created_at)
    }

    pub fn updated_at(self, updated_at: DateTime<Utc>) -> Self {
        self.set("updated_at", &updated_at)
    }
}

/// Body of the hold, release and cancel endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChangeParams {
    reason: Option<String>,
    raw: RawFields,
}

impl Model for StatusChangeParams {
    const NAME: &'static str = "StatusChangeParams";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            reason: raw.field(Self::NAME, "reason")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for StatusChangeParams {
    fn validate(&self) -> Result<(), ValidationError> {
        require("reason", &self.reason)?;
        Ok(())
    }
}

impl StatusChangeParams {
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl Builder<StatusChangeParams> {
    pub fn reason(self, reason: impl Into<String>) -> Self {
        self.set("reason", &reason.into())
    }
}

/// Query of `GET /v1/payments`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paykey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<ApiEnum<PaymentType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<ApiEnum<PaymentStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_payment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_payment_date: Option<NaiveDate>,
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
    Charge,
    ChargeCreateParams,
    Payout,
    PayoutCreateParams,
    PaymentSummary,
    StatusChangeParams,
);
