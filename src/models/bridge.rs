use crate::errors::{ModelError, ValidationError};
use crate::model::{require, require_valid, ApiEnum, Builder, Model, Nullable, RawFields, Validate};
use crate::models::common::Metadata;
use crate::models::paykeys::AccountType;
use crate::impl_model_serde;

/// Body of `POST /v1/bridge/initialize`.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeInitializeParams {
    customer_id: Option<String>,
    external_id: Nullable<String>,
    raw: RawFields,
}

impl Model for BridgeInitializeParams {
    const NAME: &'static str = "BridgeInitializeParams";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            customer_id: raw.field(Self::NAME, "customer_id")?,
            external_id: raw.nullable(Self::NAME, "external_id")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for BridgeInitializeParams {
    fn validate(&self) -> Result<(), ValidationError> {
        require("customer_id", &self.customer_id)?;
        Ok(())
    }
}

impl BridgeInitializeParams {
    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    pub fn external_id(&self) -> Nullable<&str> {
        self.external_id.as_ref().map(String::as_str)
    }
}

impl Builder<BridgeInitializeParams> {
    pub fn customer_id(self, customer_id: impl Into<String>) -> Self {
        self.set("customer_id", &customer_id.into())
    }

    pub fn external_id(self, external_id: impl Into<Option<String>>) -> Self {
        self.set_nullable("external_id", external_id.into())
    }
}

/// Short-lived token handed to the embedded bridge widget.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeToken {
    bridge_token: Option<String>,
    raw: RawFields,
}

impl Model for BridgeToken {
    const NAME: &'static str = "BridgeToken";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            bridge_token: raw.field(Self::NAME, "bridge_token")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for BridgeToken {
    fn validate(&self) -> Result<(), ValidationError> {
        require("bridge_token", &self.bridge_token)?;
        Ok(())
    }
}

impl BridgeToken {
    pub fn bridge_token(&self) -> Option<&str> {
        self.bridge_token.as_deref()
    }
}

impl Builder<BridgeToken> {
    pub fn bridge_token(self, token: impl Into<String>) -> Self {
        self.set("bridge_token", &token.into())
    }
}

/// Body of `POST /v1/bridge/bank_account`.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeLinkBankAccountParams {
    customer_id: Option<String>,
    account_number: Option<String>,
    routing_number: Option<String>,
    account_type: Option<ApiEnum<AccountType>>,
    external_id: Nullable<String>,
    metadata: Nullable<Metadata>,
    raw: RawFields,
}

impl Model for BridgeLinkBankAccountParams {
    const NAME: &'static str = "BridgeLinkBankAccountParams";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            customer_id: raw.field(Self::NAME, "customer_id")?,
            account_number: raw.field(Self::NAME, "account_number")?,
            routing_number: raw.field(Self::NAME, "routing_number")?,
            account_type: raw.field(Self::NAME, "account_type")?,
            external_id: raw.nullable(Self::NAME, "external_id")?,
            metadata: raw.nullable(Self::NAME, "metadata")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for BridgeLinkBankAccountParams {
    fn validate(&self) -> Result<(), ValidationError> {
        require("customer_id", &self.customer_id)?;
        require("account_number", &self.account_number)?;
        require("routing_number", &self.routing_number)?;
        require_valid("account_type", &self.account_type)
    }
}

impl BridgeLinkBankAccountParams {
    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }

    pub fn routing_number(&self) -> Option<&str> {
        self.routing_number.as_deref()
    }

    pub fn account_type(&self) -> Option<&ApiEnum<AccountType>> {
        self.account_type.as_ref()
    }

    pub fn external_id(&self) -> Nullable<&str> {
        self.external_id.as_ref().map(String::as_str)
    }

    pub fn metadata(&self) -> Nullable<&Metadata> {
        self.metadata.as_ref()
    }
}

impl Builder<BridgeLinkBankAccountParams> {
    pub fn customer_id(self, customer_id: impl Into<String>) -> Self {
        self.set("customer_id", &customer_id.into())
    }

    pub fn account_number(self, account_number: impl Into<String>) -> Self {
        self.set("account_number", &account_number.into())
    }

    pub fn routing_number(self, routing_number: impl Into<String>) -> Self {
        self.set("routing_number", &routing_number.into())
    }

    pub fn account_type(self, account_type: impl Into<ApiEnum<AccountType>>) -> Self {
        self.set("account_type", &account_type.into())
    }

    pub fn external_id(self, external_id: impl Into<Option<String>>) -> Self {
        self.set_nullable("external_id", external_id.into())
    }

    pub fn metadata(self, metadata: impl Into<Option<Metadata>>) -> Self {
        self.set_nullable("metadata", metadata.into())
    }
}

/// Body of `POST /v1/bridge/plaid`.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeLinkPlaidParams {
    customer_id: Option<String>,
    plaid_token: Option<String>,
    external_id: Nullable<String>,
    metadata: Nullable<Metadata>,
    raw: RawFields,
}

impl Model for BridgeLinkPlaidParams {
    const NAME: &'static str = "BridgeLinkPlaidParams";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            customer_id: raw.field(Self::NAME, "customer_id")?,
            plaid_token: raw.field(Self::NAME, "plaid_token")?,
            external_id: raw.nullable(Self::NAME, "external_id")?,
            metadata: raw.nullable(Self::NAME, "metadata")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for BridgeLinkPlaidParams {
    fn validate(&self) -> Result<(), ValidationError> {
        require("customer_id", &self.customer_id)?;
        require("plaid_token", &self.plaid_token)?;
        Ok(())
    }
}

impl BridgeLinkPlaidParams {
    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    pub fn plaid_token(&self) -> Option<&str> {
        self.plaid_token.as_deref()
    }

    pub fn external_id(&self) -> Nullable<&str> {
        self.external_id.as_ref().map(String::as_str)
    }

    pub fn metadata(&self) -> Nullable<&Metadata> {
        self.metadata.as_ref()
    }
}

impl Builder<BridgeLinkPlaidParams> {
    pub fn customer_id(self, customer_id: impl Into<String>) -> Self {
        self.set("customer_id", &customer_id.into())
    }

    pub fn plaid_token(self, plaid_token: impl Into<String>) -> Self {
        self.set("plaid_token", &plaid_token.into())
    }

    pub fn external_id(self, external_id: impl Into<Option<String>>) -> Self {
        self.set_nullable("external_id", external_id.into())
    }

    pub fn metadata(self, metadata: impl Into<Option<Metadata>>) -> Self {
        self.set_nullable("metadata", metadata.into())
    }
}

impl_model_serde!(
    BridgeInitializeParams,
    BridgeToken,
    BridgeLinkBankAccountParams,
    BridgeLinkPlaidParams,
);
