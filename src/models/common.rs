use crate::errors::{ModelError, ValidationError};
use crate::model::{check, require, require_valid, ApiEnum, Builder, Model, Nullable, RawFields, Validate};
use crate::{impl_model_serde, wire_enum};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Free-form string metadata attached to most resources.
pub type Metadata = BTreeMap<String, String>;

wire_enum! {
    /// Shape of the `data` member of a response envelope.
    pub enum ResponseType {
        Object => "object",
        Array => "array",
        Error => "error",
        None => "none",
    }
}

wire_enum! {
    pub enum SortOrder {
        Asc => "asc",
        Desc => "desc",
    }
}

wire_enum! {
    /// Outcome reason attached to a status change.
    pub enum StatusReason {
        InsufficientFunds => "insufficient_funds",
        ClosedBankAccount => "closed_bank_account",
        InvalidBankAccount => "invalid_bank_account",
        InvalidRouting => "invalid_routing",
        Disputed => "disputed",
        PaymentStopped => "payment_stopped",
        OwnerDeceased => "owner_deceased",
        FrozenBankAccount => "frozen_bank_account",
        RiskReview => "risk_review",
        Fraudulent => "fraudulent",
        DuplicateEntry => "duplicate_entry",
        InvalidPaykey => "invalid_paykey",
        PaymentBlocked => "payment_blocked",
        AmountTooLarge => "amount_too_large",
        TooManyAttempts => "too_many_attempts",
        InternalSystemError => "internal_system_error",
        UserRequest => "user_request",
        Ok => "ok",
        OtherNetworkReturn => "other_network_return",
        PayoutRefused => "payout_refused",
    }
}

wire_enum! {
    /// Who initiated a status change.
    pub enum StatusSource {
        Watchtower => "watchtower",
        BankDecline => "bank_decline",
        CustomerDispute => "customer_dispute",
        UserAction => "user_action",
        System => "system",
    }
}

/// Request bookkeeping present on every response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMetadata {
    api_request_id: Option<String>,
    api_request_timestamp: Option<DateTime<Utc>>,
    raw: RawFields,
}

impl Model for ResponseMetadata {
    const NAME: &'static str = "ResponseMetadata";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            api_request_id: raw.field(Self::NAME, "api_request_id")?,
            api_request_timestamp: raw.field(Self::NAME, "api_request_timestamp")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for ResponseMetadata {
    fn validate(&self) -> Result<(), ValidationError> {
        require("api_request_id", &self.api_request_id)?;
        require("api_request_timestamp", &self.api_request_timestamp)?;
        Ok(())
    }
}

impl ResponseMetadata {
    pub fn api_request_id(&self) -> Option<&str> {
        self.api_request_id.as_deref()
    }

    pub fn api_request_timestamp(&self) -> Option<DateTime<Utc>> {
        self.api_request_timestamp
    }
}

impl Builder<ResponseMetadata> {
    pub fn api_request_id(self, api_request_id: impl Into<String>) -> Self {
        self.set("api_request_id", &api_request_id.into())
    }

    pub fn api_request_timestamp(self, timestamp: DateTime<Utc>) -> Self {
        self.set("api_request_timestamp", &timestamp)
    }
}

/// Metadata of a paged list response.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedMetadata {
    api_request_id: Option<String>,
    api_request_timestamp: Option<DateTime<Utc>>,
    page_number: Option<i64>,
    page_size: Option<i64>,
    total_items: Option<i64>,
    max_page_size: Option<i64>,
    sort_by: Option<String>,
    sort_order: Option<ApiEnum<SortOrder>>,
    raw: RawFields,
}

impl Model for PagedMetadata {
    const NAME: &'static str = "PagedMetadata";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            api_request_id: raw.field(Self::NAME, "api_request_id")?,
            api_request_timestamp: raw.field(Self::NAME, "api_request_timestamp")?,
            page_number: raw.field(Self::NAME, "page_number")?,
            page_size: raw.field(Self::NAME, "page_size")?,
            total_items: raw.field(Self::NAME, "total_items")?,
            max_page_size: raw.field(Self::NAME, "max_page_size")?,
            sort_by: raw.field(Self::NAME, "sort_by")?,
            sort_order: raw.field(Self::NAME, "sort_order")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for PagedMetadata {
    fn validate(&self) -> Result<(), ValidationError> {
        require("api_request_id", &self.api_request_id)?;
        require("api_request_timestamp", &self.api_request_timestamp)?;
        require("page_number", &self.page_number)?;
        require("page_size", &self.page_size)?;
        require("total_items", &self.total_items)?;
        check("sort_order", &self.sort_order)
    }
}

impl PagedMetadata {
    pub fn api_request_id(&self) -> Option<&str> {
        self.api_request_id.as_deref()
    }

    pub fn api_request_timestamp(&self) -> Option<DateTime<Utc>> {
        self.api_request_timestamp
    }

    pub fn page_number(&self) -> Option<i64> {
        self.page_number
    }

    pub fn page_size(&self) -> Option<i64> {
        self.page_size
    }

    pub fn total_items(&self) -> Option<i64> {
        self.total_items
    }

    pub fn max_page_size(&self) -> Option<i64> {
        self.max_page_size
    }

    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    pub fn sort_order(&self) -> Option<&ApiEnum<SortOrder>> {
        self.sort_order.as_ref()
    }

    /// Whether pages after this one exist.
    pub fn has_more(&self) -> bool {
        match (self.page_number, self.page_size, self.total_items) {
            (Some(number), Some(size), Some(total)) => number * size < total,
            _ => false,
        }
    }
}

impl Builder<PagedMetadata> {
    pub fn api_request_id(self, api_request_id: impl Into<String>) -> Self {
        self.set("api_request_id", &api_request_id.into())
    }

    pub fn api_request_timestamp(self, timestamp: DateTime<Utc>) -> Self {
        self.set("api_request_timestamp", &timestamp)
    }

    pub fn page_number(self, page_number: i64) -> Self {
        self.set("page_number", &page_number)
    }

    pub fn page_size(self, page_size: i64) -> Self {
        self.set("page_size", &page_size)
    }

    pub fn total_items(self, total_items: i64) -> Self {
        self.set("total_items", &total_items)
    }

    pub fn max_page_size(self, max_page_size: impl Into<Option<i64>>) -> Self {
        self.set_optional("max_page_size", max_page_size.into())
    }

    pub fn sort_by(self, sort_by: impl Into<Option<String>>) -> Self {
        self.set_optional("sort_by", sort_by.into())
    }

    pub fn sort_order(self, sort_order: impl Into<ApiEnum<SortOrder>>) -> Self {
        self.set("sort_order", &sort_order.into())
    }
}

/// Envelope around a single resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    meta: Option<ResponseMetadata>,
    response_type: Option<ApiEnum<ResponseType>>,
    data: Option<T>,
    raw: RawFields,
}

impl<T: Model> Model for ApiResponse<T> {
    const NAME: &'static str = "ApiResponse";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            meta: raw.field(Self::NAME, "meta")?,
            response_type: raw.field(Self::NAME, "response_type")?,
            data: raw.field(Self::NAME, "data")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl<T: Model> Validate for ApiResponse<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        require_valid("meta", &self.meta)?;
        require_valid("response_type", &self.response_type)?;
        require_valid("data", &self.data)
    }
}

impl<T: Model> ApiResponse<T> {
    pub fn meta(&self) -> Option<&ResponseMetadata> {
        self.meta.as_ref()
    }

    pub fn response_type(&self) -> Option<&ApiEnum<ResponseType>> {
        self.response_type.as_ref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T: Model> Builder<ApiResponse<T>> {
    pub fn meta(self, meta: ResponseMetadata) -> Self {
        self.set("meta", &meta)
    }

    pub fn response_type(self, response_type: impl Into<ApiEnum<ResponseType>>) -> Self {
        self.set("response_type", &response_type.into())
    }

    pub fn data(self, data: T) -> Self {
        self.set("data", &data)
    }
}

impl<T: Model> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de, T: Model> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_json(value).map_err(serde::de::Error::custom)
    }
}

/// Envelope around one page of a list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedResponse<T> {
    meta: Option<PagedMetadata>,
    response_type: Option<ApiEnum<ResponseType>>,
    data: Option<Vec<T>>,
    raw: RawFields,
}

impl<T: Model> Model for PagedResponse<T> {
    const NAME: &'static str = "PagedResponse";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            meta: raw.field(Self::NAME, "meta")?,
            response_type: raw.field(Self::NAME, "response_type")?,
            data: raw.field(Self::NAME, "data")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl<T: Model> Validate for PagedResponse<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        require_valid("meta", &self.meta)?;
        require_valid("response_type", &self.response_type)?;
        require_valid("data", &self.data)
    }
}

impl<T: Model> PagedResponse<T> {
    pub fn meta(&self) -> Option<&PagedMetadata> {
        self.meta.as_ref()
    }

    pub fn response_type(&self) -> Option<&ApiEnum<ResponseType>> {
        self.response_type.as_ref()
    }

    pub fn data(&self) -> &[T] {
        self.data.as_deref().unwrap_or_default()
    }

    pub fn into_data(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

impl<T: Model> Builder<PagedResponse<T>> {
    pub fn meta(self, meta: PagedMetadata) -> Self {
        self.set("meta", &meta)
    }

    pub fn response_type(self, response_type: impl Into<ApiEnum<ResponseType>>) -> Self {
        self.set("response_type", &response_type.into())
    }

    pub fn data(self, data: Vec<T>) -> Self {
        self.set("data", &data)
    }
}

impl<T: Model> Serialize for PagedResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de, T: Model> Deserialize<'de> for PagedResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_json(value).map_err(serde::de::Error::custom)
    }
}

/// US postal address.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    address1: Option<String>,
    address2: Nullable<String>,
    city: Option<String>,
    state: Option<String>,
    zip: Option<String>,
    raw: RawFields,
}

impl Model for Address {
    const NAME: &'static str = "Address";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            address1: raw.field(Self::NAME, "address1")?,
            address2: raw.nullable(Self::NAME, "address2")?,
            city: raw.field(Self::NAME, "city")?,
            state: raw.field(Self::NAME, "state")?,
            zip: raw.field(Self::NAME, "zip")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for Address {
    fn validate(&self) -> Result<(), ValidationError> {
        require("address1", &self.address1)?;
        require("city", &self.city)?;
        require("state", &self.state)?;
        require("zip", &self.zip)?;
        Ok(())
    }
}

impl Address {
    pub fn address1(&self) -> Option<&str> {
        self.address1.as_deref()
    }

    pub fn address2(&self) -> Nullable<&str> {
        self.address2.as_ref().map(String::as_str)
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn zip(&self) -> Option<&str> {
        self.zip.as_deref()
    }
}

impl Builder<Address> {
    pub fn address1(self, address1: impl Into<String>) -> Self {
        self.set("address1", &address1.into())
    }

    pub fn address2(self, address2: impl Into<Option<String>>) -> Self {
        self.set_nullable("address2", address2.into())
    }

    pub fn city(self, city: impl Into<String>) -> Self {
        self.set("city", &city.into())
    }

    pub fn state(self, state: impl Into<String>) -> Self {
        self.set("state", &state.into())
    }

    pub fn zip(self, zip: impl Into<String>) -> Self {
        self.set("zip", &zip.into())
    }
}

/// Device the end user acted from.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    ip_address: Option<String>,
    raw: RawFields,
}

impl Model for Device {
    const NAME: &'static str = "Device";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            ip_address: raw.field(Self::NAME, "ip_address")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for Device {
    fn validate(&self) -> Result<(), ValidationError> {
        require("ip_address", &self.ip_address)?;
        Ok(())
    }
}

impl Device {
    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }
}

impl Builder<Device> {
    pub fn ip_address(self, ip_address: impl Into<String>) -> Self {
        self.set("ip_address", &ip_address.into())
    }
}

/// Why a resource is in its current status.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusDetails {
    message: Option<String>,
    reason: Option<ApiEnum<StatusReason>>,
    source: Option<ApiEnum<StatusSource>>,
    changed_at: Option<DateTime<Utc>>,
    code: Nullable<String>,
    raw: RawFields,
}

impl Model for StatusDetails {
    const NAME: &'static str = "StatusDetails";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            message: raw.field(Self::NAME, "message")?,
            reason: raw.field(Self::NAME, "reason")?,
            source: raw.field(Self::NAME, "source")?,
            changed_at: raw.field(Self::NAME, "changed_at")?,
            code: raw.nullable(Self::NAME, "code")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for StatusDetails {
    fn validate(&self) -> Result<(), ValidationError> {
        require("message", &self.message)?;
        require_valid("reason", &self.reason)?;
        require_valid("source", &self.source)?;
        require("changed_at", &self.changed_at)?;
        Ok(())
    }
}

impl StatusDetails {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn reason(&self) -> Option<&ApiEnum<StatusReason>> {
        self.reason.as_ref()
    }

    pub fn source(&self) -> Option<&ApiEnum<StatusSource>> {
        self.source.as_ref()
    }

    pub fn changed_at(&self) -> Option<DateTime<Utc>> {
        self.changed_at
    }

    pub fn code(&self) -> Nullable<&str> {
        self.code.as_ref().map(String::as_str)
    }
}

impl Builder<StatusDetails> {
    pub fn message(self, message: impl Into<String>) -> Self {
        self.set("message", &message.into())
    }

    pub fn reason(self, reason: impl Into<ApiEnum<StatusReason>>) -> Self {
        self.set("reason", &reason.into())
    }

    pub fn source(self, source: impl Into<ApiEnum<StatusSource>>) -> Self {
        self.set("source", &source.into())
    }

    pub fn changed_at(self, changed_at: DateTime<Utc>) -> Self {
        self.set("changed_at", &changed_at)
    }

    pub fn code(self, code: impl Into<Option<String>>) -> Self {
        self.set_nullable("code", code.into())
    }
}

impl_model_serde!(ResponseMetadata, PagedMetadata, Address, Device, StatusDetails);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_address2_null_is_kept() {
        let address = Address::builder()
            .address1("1 Main St")
            .address2(None)
            .city("Austin")
            .state("TX")
            .zip("78701")
            .build()
            .unwrap();

        assert!(address.address2().is_null());
        assert_eq!(address.to_json()["address2"], json!(null));
        assert!(address.validate().is_ok());
    }

    #[test]
    fn test_paged_metadata_has_more() {
        let meta = PagedMetadata::from_json(json!({
            "api_request_id": "req_1",
            "api_request_timestamp": "2024-05-01T12:00:00Z",
            "page_number": 1,
            "page_size": 10,
            "total_items": 25
        }))
        .unwrap();
        assert!(meta.has_more());
        assert!(meta.validate().is_ok());
    }

    #[test]
    fn test_envelope_validation_path() {
        let response: ApiResponse<Device> = ApiResponse::from_json(json!({
            "meta": {"api_request_id": "req_1", "api_request_timestamp": "2024-05-01T12:00:00Z"},
            "response_type": "object",
            "data": {}
        }))
        .unwrap();
        let err = response.validate().unwrap_err();
        assert_eq!(err.path(), "data.ip_address");
    }
}
