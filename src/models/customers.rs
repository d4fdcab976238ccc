use crate::errors::{ModelError, ValidationError};
use crate::model::{
    check, require, require_valid, resolve_variant, ApiEnum, Builder, Model, Nullable, RawFields,
    TypedFields, Validate, VariantRule,
};
use crate::models::common::{Address, Device, Metadata, SortOrder};
use crate::{impl_model_serde, wire_enum};
use chrono::{DateTime, Utc};
use serde::Serialize;

wire_enum! {
    pub enum CustomerType {
        Individual => "individual",
        Business => "business",
    }
}

wire_enum! {
    pub enum CustomerStatus {
        Pending => "pending",
        Review => "review",
        Verified => "verified",
        Inactive => "inactive",
        Rejected => "rejected",
    }
}

wire_enum! {
    /// When identity verification runs relative to the create call.
    pub enum ProcessingMethod {
        Inline => "inline",
        Background => "background",
        Skip => "skip",
    }
}

wire_enum! {
    /// Forced verification outcome, honored only in sandbox.
    pub enum SandboxOutcome {
        Standard => "standard",
        Verified => "verified",
        Rejected => "rejected",
        Review => "review",
    }
}

wire_enum! {
    pub enum ReviewDecision {
        Accept => "accept",
        Reject => "reject",
        Review => "review",
    }
}

wire_enum! {
    /// Final status a reviewer can put a customer or paykey in.
    pub enum ReviewOutcome {
        Verified => "verified",
        Rejected => "rejected",
    }
}

wire_enum! {
    pub enum Correlation {
        LowConfidence => "low_confidence",
        PotentialMatch => "potential_match",
        LikelyMatch => "likely_match",
        HighConfidence => "high_confidence",
    }
}

/// Verification behavior requested for a customer.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerConfig {
    processing_method: Option<ApiEnum<ProcessingMethod>>,
    sandbox_outcome: Option<ApiEnum<SandboxOutcome>>,
    raw: RawFields,
}

impl Model for CustomerConfig {
    const NAME: &'static str = "CustomerConfig";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            processing_method: raw.field(Self::NAME, "processing_method")?,
            sandbox_outcome: raw.field(Self::NAME, "sandbox_outcome")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for CustomerConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        check("processing_method", &self.processing_method)?;
        check("sandbox_outcome", &self.sandbox_outcome)
    }
}

impl CustomerConfig {
    pub fn processing_method(&self) -> Option<&ApiEnum<ProcessingMethod>> {
        self.processing_method.as_ref()
    }

    pub fn sandbox_outcome(&self) -> Option<&ApiEnum<SandboxOutcome>> {
        self.sandbox_outcome.as_ref()
    }
}

impl Builder<CustomerConfig> {
    pub fn processing_method(self, method: impl Into<ApiEnum<ProcessingMethod>>) -> Self {
        self.set("processing_method", &method.into())
    }

    pub fn sandbox_outcome(self, outcome: impl Into<ApiEnum<SandboxOutcome>>) -> Self {
        self.set("sandbox_outcome", &outcome.into())
    }
}

/// Compliance data for a person.
#[derive(Debug, Clone, PartialEq)]
pub struct IndividualComplianceProfile {
    dob: Option<String>,
    ssn: Option<String>,
    raw: RawFields,
}

impl Model for IndividualComplianceProfile {
    const NAME: &'static str = "IndividualComplianceProfile";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            dob: raw.field(Self::NAME, "dob")?,
            ssn: raw.field(Self::NAME, "ssn")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for IndividualComplianceProfile {
    fn validate(&self) -> Result<(), ValidationError> {
        require("dob", &self.dob)?;
        require("ssn", &self.ssn)?;
        Ok(())
    }
}

impl IndividualComplianceProfile {
    /// Date of birth, `YYYY-MM-DD`; masked in responses.
    pub fn dob(&self) -> Option<&str> {
        self.dob.as_deref()
    }

    /// Social security number; masked in responses.
    pub fn ssn(&self) -> Option<&str> {
        self.ssn.as_deref()
    }
}

impl Builder<IndividualComplianceProfile> {
    pub fn dob(self, dob: impl Into<String>) -> Self {
        self.set("dob", &dob.into())
    }

    pub fn ssn(self, ssn: impl Into<String>) -> Self {
        self.set("ssn", &ssn.into())
    }
}

/// Compliance data for a business.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessComplianceProfile {
    ein: Option<String>,
    legal_business_name: Option<String>,
    website: Nullable<String>,
    raw: RawFields,
}

impl Model for BusinessComplianceProfile {
    const NAME: &'static str = "BusinessComplianceProfile";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            ein: raw.field(Self::NAME, "ein")?,
            legal_business_name: raw.field(Self::NAME, "legal_business_name")?,
            website: raw.nullable(Self::NAME, "website")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for BusinessComplianceProfile {
    fn validate(&self) -> Result<(), ValidationError> {
        require("ein", &self.ein)?;
        require("legal_business_name", &self.legal_business_name)?;
        Ok(())
    }
}

impl BusinessComplianceProfile {
    pub fn ein(&self) -> Option<&str> {
        self.ein.as_deref()
    }

    pub fn legal_business_name(&self) -> Option<&str> {
        self.legal_business_name.as_deref()
    }

    pub fn website(&self) -> Nullable<&str> {
        self.website.as_ref().map(String::as_str)
    }
}

impl Builder<BusinessComplianceProfile> {
    pub fn ein(self, ein: impl Into<String>) -> Self {
        self.set("ein", &ein.into())
    }

    pub fn legal_business_name(self, name: impl Into<String>) -> Self {
        self.set("legal_business_name", &name.into())
    }

    pub fn website(self, website: impl Into<Option<String>>) -> Self {
        self.set_nullable("website", website.into())
    }
}

/// Compliance profile of a customer. The wire form carries no type tag; the
/// shape is recognized by its fields, individual first.
#[derive(Debug, Clone, PartialEq)]
pub enum ComplianceProfile {
    Individual(IndividualComplianceProfile),
    Business(BusinessComplianceProfile),
}

const COMPLIANCE_PROFILE_VARIANTS: &[VariantRule<ComplianceProfile>] = &[
    VariantRule {
        name: "individual",
        required: &["dob", "ssn"],
        build: |raw| IndividualComplianceProfile::from_raw(raw).map(ComplianceProfile::Individual),
    },
    VariantRule {
        name: "business",
        required: &["ein", "legal_business_name"],
        build: |raw| BusinessComplianceProfile::from_raw(raw).map(ComplianceProfile::Business),
    },
];

impl Model for ComplianceProfile {
    const NAME: &'static str = "ComplianceProfile";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        resolve_variant(Self::NAME, raw, COMPLIANCE_PROFILE_VARIANTS)
    }

    fn raw(&self) -> &RawFields {
        match self {
            ComplianceProfile::Individual(profile) => profile.raw(),
            ComplianceProfile::Business(profile) => profile.raw(),
        }
    }
}

impl Validate for ComplianceProfile {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            ComplianceProfile::Individual(profile) => profile.validate(),
            ComplianceProfile::Business(profile) => profile.validate(),
        }
    }
}

impl ComplianceProfile {
    pub fn as_individual(&self) -> Option<&IndividualComplianceProfile> {
        match self {
            ComplianceProfile::Individual(profile) => Some(profile),
            ComplianceProfile::Business(_) => None,
        }
    }

    pub fn as_business(&self) -> Option<&BusinessComplianceProfile> {
        match self {
            ComplianceProfile::Business(profile) => Some(profile),
            ComplianceProfile::Individual(_) => None,
        }
    }
}

impl From<IndividualComplianceProfile> for ComplianceProfile {
    fn from(profile: IndividualComplianceProfile) -> Self {
        ComplianceProfile::Individual(profile)
    }
}

impl From<BusinessComplianceProfile> for ComplianceProfile {
    fn from(profile: BusinessComplianceProfile) -> Self {
        ComplianceProfile::Business(profile)
    }
}

/// Carries an already-resolved profile into a builder so rebuilding keeps its variant.
fn keep_profile<T: Model>(
    builder: Builder<T>,
    profile: &Nullable<ComplianceProfile>,
) -> Builder<T> {
    match profile.value() {
        Some(profile) => builder.keep_typed("compliance_profile", profile.clone()),
        None => builder,
    }
}

/// An individual or business that sends or receives payments.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: Option<String>,
    name: Option<String>,
    customer_type: Option<ApiEnum<CustomerType>>,
    email: Option<String>,
    phone: Option<String>,
    status: Option<ApiEnum<CustomerStatus>>,
    external_id: Nullable<String>,
    address: Nullable<Address>,
    compliance_profile: Nullable<ComplianceProfile>,
    config: Option<CustomerConfig>,
    device: Option<Device>,
    metadata: Nullable<Metadata>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    raw: RawFields,
}

impl Model for Customer {
    const NAME: &'static str = "Customer";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Self::from_parts(raw, TypedFields::default())
    }

    fn from_parts(raw: RawFields, mut typed: TypedFields) -> Result<Self, ModelError> {
        Ok(Self {
            id: raw.field(Self::NAME, "id")?,
            name: raw.field(Self::NAME, "name")?,
            customer_type: raw.field(Self::NAME, "type")?,
            email: raw.field(Self::NAME, "email")?,
            phone: raw.field(Self::NAME, "phone")?,
            status: raw.field(Self::NAME, "status")?,
            external_id: raw.nullable(Self::NAME, "external_id")?,
            address: raw.nullable(Self::NAME, "address")?,
            compliance_profile: typed.nullable(&raw, Self::NAME, "compliance_profile")?,
            config: raw.field(Self::NAME, "config")?,
            device: raw.field(Self::NAME, "device")?,
            metadata: raw.nullable(Self::NAME, "metadata")?,
            created_at: raw.field(Self::NAME, "created_at")?,
            updated_at: raw.field(Self::NAME, "updated_at")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }

    fn to_builder(&self) -> Builder<Self> {
        keep_profile(Builder::from_raw(self.raw.clone()), &self.compliance_profile)
    }
}

impl Validate for Customer {
    fn validate(&self) -> Result<(), ValidationError> {
        require("id", &self.id)?;
        require("name", &self.name)?;
        require_valid("type", &self.customer_type)?;
        require("email", &self.email)?;
        require("phone", &self.phone)?;
        require_valid("status", &self.status)?;
        check("address", &self.address)?;
        check("compliance_profile", &self.compliance_profile)?;
        check("config", &self.config)?;
        check("device", &self.device)?;
        require("created_at", &self.created_at)?;
        require("updated_at", &self.updated_at)?;
        Ok(())
    }
}

impl Customer {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn customer_type(&self) -> Option<&ApiEnum<CustomerType>> {
        self.customer_type.as_ref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn status(&self) -> Option<&ApiEnum<CustomerStatus>> {
        self.status.as_ref()
    }

    pub fn external_id(&self) -> Nullable<&str> {
        self.external_id.as_ref().map(String::as_str)
    }

    pub fn address(&self) -> Nullable<&Address> {
        self.address.as_ref()
    }

    pub fn compliance_profile(&self) -> Nullable<&ComplianceProfile> {
        self.compliance_profile.as_ref()
    }

    pub fn config(&self) -> Option<&CustomerConfig> {
        self.config.as_ref()
    }

    pub fn device(&self) -> Option<&Device> {
        self.device.as_ref()
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

impl Builder<Customer> {
    pub fn id(self, id: impl Into<String>) -> Self {
        self.set("id", &id.into())
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.set("name", &name.into())
    }

    pub fn customer_type(self, customer_type: impl Into<ApiEnum<CustomerType>>) -> Self {
        self.set("type", &customer_type.into())
    }

    pub fn email(self, email: impl Into<String>) -> Self {
        self.set("email", &email.into())
    }

    pub fn phone(self, phone: impl Into<String>) -> Self {
        self.set("phone", &phone.into())
    }

    pub fn status(self, status: impl Into<ApiEnum<CustomerStatus>>) -> Self {
        self.set("status", &status.into())
    }

    pub fn external_id(self, external_id: impl Into<Option<String>>) -> Self {
        self.set_nullable("external_id", external_id.into())
    }

    pub fn address(self, address: impl Into<Option<Address>>) -> Self {
        self.set_nullable("address", address.into())
    }

    pub fn compliance_profile(self, profile: impl Into<Option<ComplianceProfile>>) -> Self {
        self.set_nullable_typed("compliance_profile", profile.into())
    }

    pub fn config(self, config: impl Into<Option<CustomerConfig>>) -> Self {
        self.set_optional("config", config.into())
    }

    pub fn device(self, device: impl Into<Option<Device>>) -> Self {
        self.set_optional("device", device.into())
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

/// Body of `POST /v1/customers`.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerCreateParams {
    name: Option<String>,
    customer_type: Option<ApiEnum<CustomerType>>,
    email: Option<String>,
    phone: Option<String>,
    device: Option<Device>,
    external_id: Nullable<String>,
    address: Nullable<Address>,
    compliance_profile: Nullable<ComplianceProfile>,
    config: Option<CustomerConfig>,
    metadata: Nullable<Metadata>,
    raw: RawFields,
}

impl Model for CustomerCreateParams {
    const NAME: &'static str = "CustomerCreateParams";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Self::from_parts(raw, TypedFields::default())
    }

    fn from_parts(raw: RawFields, mut typed: TypedFields) -> Result<Self, ModelError> {
        Ok(Self {
            name: raw.field(Self::NAME, "name")?,
            customer_type: raw.field(Self::NAME, "type")?,
            email: raw.field(Self::NAME, "email")?,
            phone: raw.field(Self::NAME, "phone")?,
            device: raw.field(Self::NAME, "device")?,
            external_id: raw.nullable(Self::NAME, "external_id")?,
            address: raw.nullable(Self::NAME, "address")?,
            compliance_profile: typed.nullable(&raw, Self::NAME, "compliance_profile")?,
            config: raw.field(Self::NAME, "config")?,
            metadata: raw.nullable(Self::NAME, "metadata")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }

    fn to_builder(&self) -> Builder<Self> {
        keep_profile(Builder::from_raw(self.raw.clone()), &self.compliance_profile)
    }
}

impl Validate for CustomerCreateParams {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require_valid("type", &self.customer_type)?;
        require("email", &self.email)?;
        require("phone", &self.phone)?;
        require_valid("device", &self.device)?;
        check("address", &self.address)?;
        check("compliance_profile", &self.compliance_profile)?;
        check("config", &self.config)
    }
}

impl CustomerCreateParams {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn customer_type(&self) -> Option<&ApiEnum<CustomerType>> {
        self.customer_type.as_ref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn device(&self) -> Option<&Device> {
        self.device.as_ref()
    }

    pub fn external_id(&self) -> Nullable<&str> {
        self.external_id.as_ref().map(String::as_str)
    }

    pub fn address(&self) -> Nullable<&Address> {
        self.address.as_ref()
    }

    pub fn compliance_profile(&self) -> Nullable<&ComplianceProfile> {
        self.compliance_profile.as_ref()
    }

    pub fn config(&self) -> Option<&CustomerConfig> {
        self.config.as_ref()
    }

    pub fn metadata(&self) -> Nullable<&Metadata> {
        self.metadata.as_ref()
    }
}

impl Builder<CustomerCreateParams> {
    pub fn name(self, name: impl Into<String>) -> Self {
        self.set("name", &name.into())
    }

    pub fn customer_type(self, customer_type: impl Into<ApiEnum<CustomerType>>) -> Self {
        self.set("type", &customer_type.into())
    }

    pub fn email(self, email: impl Into<String>) -> Self {
        self.set("email", &email.into())
    }

    pub fn phone(self, phone: impl Into<String>) -> Self {
        self.set("phone", &phone.into())
    }

    pub fn device(self, device: Device) -> Self {
        self.set("device", &device)
    }

    pub fn external_id(self, external_id: impl Into<Option<String>>) -> Self {
        self.set_nullable("external_id", external_id.into())
    }

    pub fn address(self, address: impl Into<Option<Address>>) -> Self {
        self.set_nullable("address", address.into())
    }

    pub fn compliance_profile(self, profile: impl Into<Option<ComplianceProfile>>) -> Self {
        self.set_nullable_typed("compliance_profile", profile.into())
    }

    pub fn config(self, config: impl Into<Option<CustomerConfig>>) -> Self {
        self.set_optional("config", config.into())
    }

    pub fn metadata(self, metadata: impl Into<Option<Metadata>>) -> Self {
        self.set_nullable("metadata", metadata.into())
    }
}

/// Body of `PUT /v1/customers/{id}`.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerUpdateParams {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    device: Option<Device>,
    status: Option<ApiEnum<CustomerStatus>>,
    external_id: Nullable<String>,
    address: Nullable<Address>,
    compliance_profile: Nullable<ComplianceProfile>,
    metadata: Nullable<Metadata>,
    raw: RawFields,
}

impl Model for CustomerUpdateParams {
    const NAME: &'static str = "CustomerUpdateParams";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Self::from_parts(raw, TypedFields::default())
    }

    fn from_parts(raw: RawFields, mut typed: TypedFields) -> Result<Self, ModelError> {
        Ok(Self {
            name: raw.field(Self::NAME, "name")?,
            email: raw.field(Self::NAME, "email")?,
            phone: raw.field(Self::NAME, "phone")?,
            device: raw.field(Self::NAME, "device")?,
            status: raw.field(Self::NAME, "status")?,
            external_id: raw.nullable(Self::NAME, "external_id")?,
            address: raw.nullable(Self::NAME, "address")?,
            compliance_profile: typed.nullable(&raw, Self::NAME, "compliance_profile")?,
            metadata: raw.nullable(Self::NAME, "metadata")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }

    fn to_builder(&self) -> Builder<Self> {
        keep_profile(Builder::from_raw(self.raw.clone()), &self.compliance_profile)
    }
}

impl Validate for CustomerUpdateParams {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("phone", &self.phone)?;
        require_valid("device", &self.device)?;
        check("status", &self.status)?;
        check("address", &self.address)?;
        check("compliance_profile", &self.compliance_profile)
    }
}

impl CustomerUpdateParams {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn device(&self) -> Option<&Device> {
        self.device.as_ref()
    }

    pub fn status(&self) -> Option<&ApiEnum<CustomerStatus>> {
        self.status.as_ref()
    }

    pub fn external_id(&self) -> Nullable<&str> {
        self.external_id.as_ref().map(String::as_str)
    }

    pub fn address(&self) -> Nullable<&Address> {
        self.address.as_ref()
    }

    pub fn compliance_profile(&self) -> Nullable<&ComplianceProfile> {
        self.compliance_profile.as_ref()
    }

    pub fn metadata(&self) -> Nullable<&Metadata> {
        self.metadata.as_ref()
    }
}

impl Builder<CustomerUpdateParams> {
    pub fn name(self, name: impl Into<String>) -> Self {
        self.set("name", &name.into())
    }

    pub fn email(self, email: impl Into<String>) -> Self {
        self.set("email", &email.into())
    }

    pub fn phone(self, phone: impl Into<String>) -> Self {
        self.set("phone", &phone.into())
    }

    pub fn device(self, device: Device) -> Self {
        self.set("device", &device)
    }

    pub fn status(self, status: impl Into<ApiEnum<CustomerStatus>>) -> Self {
        self.set("status", &status.into())
    }

    pub fn external_id(self, external_id: impl Into<Option<String>>) -> Self {
        self.set_nullable("external_id", external_id.into())
    }

    pub fn address(self, address: impl Into<Option<Address>>) -> Self {
        self.set_nullable("address", address.into())
    }

    pub fn compliance_profile(self, profile: impl Into<Option<ComplianceProfile>>) -> Self {
        self.set_nullable_typed("compliance_profile", profile.into())
    }

    pub fn metadata(self, metadata: impl Into<Option<Metadata>>) -> Self {
        self.set_nullable("metadata", metadata.into())
    }
}

/// Result of one identity check (email, phone, fraud, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationResult {
    decision: Option<ApiEnum<ReviewDecision>>,
    risk_score: Nullable<f64>,
    correlation: Option<ApiEnum<Correlation>>,
    correlation_score: Nullable<f64>,
    codes: Nullable<Vec<String>>,
    raw: RawFields,
}

impl Model for VerificationResult {
    const NAME: &'static str = "VerificationResult";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            decision: raw.field(Self::NAME, "decision")?,
            risk_score: raw.nullable(Self::NAME, "risk_score")?,
            correlation: raw.field(Self::NAME, "correlation")?,
            correlation_score: raw.nullable(Self::NAME, "correlation_score")?,
            codes: raw.nullable(Self::NAME, "codes")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for VerificationResult {
    fn validate(&self) -> Result<(), ValidationError> {
        check("decision", &self.decision)?;
        check("correlation", &self.correlation)
    }
}

impl VerificationResult {
    pub fn decision(&self) -> Option<&ApiEnum<ReviewDecision>> {
        self.decision.as_ref()
    }

    pub fn risk_score(&self) -> Nullable<f64> {
        self.risk_score.clone()
    }

    pub fn correlation(&self) -> Option<&ApiEnum<Correlation>> {
        self.correlation.as_ref()
    }

    pub fn correlation_score(&self) -> Nullable<f64> {
        self.correlation_score.clone()
    }

    pub fn codes(&self) -> Nullable<&[String]> {
        self.codes.as_ref().map(Vec::as_slice)
    }
}

impl Builder<VerificationResult> {
    pub fn decision(self, decision: impl Into<ApiEnum<ReviewDecision>>) -> Self {
        self.set("decision", &decision.into())
    }

    pub fn risk_score(self, risk_score: impl Into<Option<f64>>) -> Self {
        self.set_nullable("risk_score", risk_score.into())
    }

    pub fn correlation(self, correlation: impl Into<ApiEnum<Correlation>>) -> Self {
        self.set("correlation", &correlation.into())
    }

    pub fn correlation_score(self, score: impl Into<Option<f64>>) -> Self {
        self.set_nullable("correlation_score", score.into())
    }

    pub fn codes(self, codes: impl Into<Option<Vec<String>>>) -> Self {
        self.set_nullable("codes", codes.into())
    }
}

/// Per-check results of an identity review.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityBreakdown {
    email: Option<VerificationResult>,
    phone: Option<VerificationResult>,
    fraud: Option<VerificationResult>,
    synthetic: Option<VerificationResult>,
    address: Option<VerificationResult>,
    business_identification: Option<VerificationResult>,
    raw: RawFields,
}

impl Model for IdentityBreakdown {
    const NAME: &'static str = "IdentityBreakdown";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            email: raw.field(Self::NAME, "email")?,
            phone: raw.field(Self::NAME, "phone")?,
            fraud: raw.field(Self::NAME, "fraud")?,
            synthetic: raw.field(Self::NAME, "synthetic")?,
            address: raw.field(Self::NAME, "address")?,
            business_identification: raw.field(Self::NAME, "business_identification")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for IdentityBreakdown {
    fn validate(&self) -> Result<(), ValidationError> {
        check("email", &self.email)?;
        check("phone", &self.phone)?;
        check("fraud", &self.fraud)?;
        check("synthetic", &self.synthetic)?;
        check("address", &self.address)?;
        check("business_identification", &self.business_identification)
    }
}

impl IdentityBreakdown {
    pub fn email(&self) -> Option<&VerificationResult> {
        self.email.as_ref()
    }

    pub fn phone(&self) -> Option<&VerificationResult> {
        self.phone.as_ref()
    }

    pub fn fraud(&self) -> Option<&VerificationResult> {
        self.fraud.as_ref()
    }

    pub fn synthetic(&self) -> Option<&VerificationResult> {
        self.synthetic.as_ref()
    }

    pub fn address(&self) -> Option<&VerificationResult> {
        self.address.as_ref()
    }

    pub fn business_identification(&self) -> Option<&VerificationResult> {
        self.business_identification.as_ref()
    }
}

impl Builder<IdentityBreakdown> {
    pub fn email(self, result: impl Into<Option<VerificationResult>>) -> Self {
        self.set_optional("email", result.into())
    }

    pub fn phone(self, result: impl Into<Option<VerificationResult>>) -> Self {
        self.set_optional("phone", result.into())
    }

    pub fn fraud(self, result: impl Into<Option<VerificationResult>>) -> Self {
        self.set_optional("fraud", result.into())
    }

    pub fn synthetic(self, result: impl Into<Option<VerificationResult>>) -> Self {
        self.set_optional("synthetic", result.into())
    }

    pub fn address(self, result: impl Into<Option<VerificationResult>>) -> Self {
        self.set_optional("address", result.into())
    }

    pub fn business_identification(self, result: impl Into<Option<VerificationResult>>) -> Self {
        self.set_optional("business_identification", result.into())
    }
}

/// Outcome of identity verification for a customer.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityDetails {
    review_id: Option<String>,
    decision: Option<ApiEnum<ReviewDecision>>,
    breakdown: Option<IdentityBreakdown>,
    messages: Nullable<Metadata>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    raw: RawFields,
}

impl Model for IdentityDetails {
    const NAME: &'static str = "IdentityDetails";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            review_id: raw.field(Self::NAME, "review_id")?,
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

impl Validate for IdentityDetails {
    fn validate(&self) -> Result<(), ValidationError> {
        require("review_id", &self.review_id)?;
        require_valid("decision", &self.decision)?;
        require_valid("breakdown", &self.breakdown)?;
        require("created_at", &self.created_at)?;
        require("updated_at", &self.updated_at)?;
        Ok(())
    }
}

impl IdentityDetails {
    pub fn review_id(&self) -> Option<&str> {
        self.review_id.as_deref()
    }

    pub fn decision(&self) -> Option<&ApiEnum<ReviewDecision>> {
        self.decision.as_ref()
    }

    pub fn breakdown(&self) -> Option<&IdentityBreakdown> {
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

impl Builder<IdentityDetails> {
    pub fn review_id(self, review_id: impl Into<String>) -> Self {
        self.set("review_id", &review_id.into())
    }

    pub fn decision(self, decision: impl Into<ApiEnum<ReviewDecision>>) -> Self {
        self.set("decision", &decision.into())
    }

    pub fn breakdown(self, breakdown: IdentityBreakdown) -> Self {
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

/// Response of `GET /v1/customers/{id}/review`.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerReview {
    customer_details: Option<Customer>,
    identity_details: Nullable<IdentityDetails>,
    raw: RawFields,
}

impl Model for CustomerReview {
    const NAME: &'static str = "CustomerReview";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            customer_details: raw.field(Self::NAME, "customer_details")?,
            identity_details: raw.nullable(Self::NAME, "identity_details")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for CustomerReview {
    fn validate(&self) -> Result<(), ValidationError> {
        require_valid("customer_details", &self.customer_details)?;
        check("identity_details", &self.identity_details)
    }
}

impl CustomerReview {
    pub fn customer_details(&self) -> Option<&Customer> {
        self.customer_details.as_ref()
    }

    pub fn identity_details(&self) -> Nullable<&IdentityDetails> {
        self.identity_details.as_ref()
    }
}

impl Builder<CustomerReview> {
    pub fn customer_details(self, customer: Customer) -> Self {
        self.set("customer_details", &customer)
    }

    pub fn identity_details(self, details: impl Into<Option<IdentityDetails>>) -> Self {
        self.set_nullable("identity_details", details.into())
    }
}

/// Body of a manual review decision (`PATCH .../review`).
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDecisionParams {
    status: Option<ApiEnum<ReviewOutcome>>,
    raw: RawFields,
}

impl Model for ReviewDecisionParams {
    const NAME: &'static str = "ReviewDecisionParams";

    fn from_raw(raw: RawFields) -> Result<Self, ModelError> {
        Ok(Self {
            status: raw.field(Self::NAME, "status")?,
            raw,
        })
    }

    fn raw(&self) -> &RawFields {
        &self.raw
    }
}

impl Validate for ReviewDecisionParams {
    fn validate(&self) -> Result<(), ValidationError> {
        require_valid("status", &self.status)
    }
}

impl ReviewDecisionParams {
    pub fn status(&self) -> Option<&ApiEnum<ReviewOutcome>> {
        self.status.as_ref()
    }
}

impl Builder<ReviewDecisionParams> {
    pub fn status(self, status: impl Into<ApiEnum<ReviewOutcome>>) -> Self {
        self.set("status", &status.into())
    }
}

/// Query of `GET /v1/customers`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApiEnum<CustomerStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<ApiEnum<CustomerType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_to: Option<DateTime<Utc>>,
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
    CustomerConfig,
    IndividualComplianceProfile,
    BusinessComplianceProfile,
    ComplianceProfile,
    Customer,
    CustomerCreateParams,
    CustomerUpdateParams,
    VerificationResult,
    IdentityBreakdown,
    IdentityDetails,
    CustomerReview,
    ReviewDecisionParams,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationErrorKind;
    use serde_json::json;

    #[test]
    fn test_compliance_profile_resolves_by_fields() {
        let individual =
            ComplianceProfile::from_json(json!({"dob": "1990-01-01", "ssn": "***-**-1234"}))
                .unwrap();
        assert!(individual.as_individual().is_some());

        let business = ComplianceProfile::from_json(json!({
            "ein": "12-3456789",
            "legal_business_name": "Acme LLC",
            "website": null
        }))
        .unwrap();
        assert_eq!(
            business.as_business().and_then(|b| b.legal_business_name()),
            Some("Acme LLC")
        );
        assert_eq!(business.to_json()["website"], json!(null));
    }

    #[test]
    fn test_compliance_profile_prefers_individual() {
        let both = ComplianceProfile::from_json(json!({
            "dob": "1990-01-01",
            "ssn": "123-45-6789",
            "ein": "12-3456789",
            "legal_business_name": "Acme LLC"
        }))
        .unwrap();
        assert!(matches!(both, ComplianceProfile::Individual(_)));
        // keys belonging to the other shape are still carried
        assert_eq!(both.to_json()["ein"], json!("12-3456789"));
    }

    #[test]
    fn test_compliance_profile_unmatched_fails_at_parse() {
        let err = ComplianceProfile::from_json(json!({"dob": "1990-01-01"})).unwrap_err();
        assert!(matches!(err, ModelError::UnresolvedVariant { .. }));

        let customer = Customer::from_json(json!({
            "id": "cus_1",
            "compliance_profile": {"website": "acme.test"}
        }));
        assert!(customer.is_err());
    }

    #[test]
    fn test_customer_validate_reports_first_violation() {
        let customer = Customer::from_json(json!({
            "id": "cus_1",
            "status": "frozen"
        }))
        .unwrap();
        let err = customer.validate().unwrap_err();
        // name precedes status in declaration order
        assert_eq!(err.path(), "name");
        assert_eq!(err.kind(), &ValidationErrorKind::MissingRequired);
    }

    #[test]
    fn test_review_decision_body() {
        let params = ReviewDecisionParams::builder()
            .status(ReviewOutcome::Verified)
            .build()
            .unwrap();
        assert_eq!(params.to_json(), json!({"status": "verified"}));
    }
}
