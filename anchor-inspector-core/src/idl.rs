//! IDL (Interface Definition Language) types for Anchor programs.
//!
//! Models the JSON emitted by `anchor build` (pre-0.30 layout). Only the
//! parts the inspector reads are typed; everything else is kept as raw JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{InspectorError, InspectorResult};
use crate::pubkey::Pubkey;

/// Top-level IDL for an Anchor program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idl {
    pub version: String,
    pub name: String,
    pub instructions: Vec<IdlInstruction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<IdlTypeDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<IdlTypeDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<IdlError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<IdlMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdlMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// An instruction in the IDL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlInstruction {
    pub name: String,
    pub accounts: Vec<IdlAccountItem>,
    pub args: Vec<IdlField>,
}

/// An account expected by an instruction, or a named group of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdlAccountItem {
    Group(IdlAccounts),
    Account(IdlAccount),
}

/// A nested account group (a composite `Accounts` struct).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlAccounts {
    pub name: String,
    pub accounts: Vec<IdlAccountItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdlAccount {
    pub name: String,
    #[serde(default, alias = "writable")]
    pub is_mut: bool,
    #[serde(default, alias = "signer")]
    pub is_signer: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pda: Option<IdlPda>,
}

fn is_false(v: &bool) -> bool {
    !v
}

/// PDA derivation specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdlPda {
    pub seeds: Vec<IdlSeed>,
    /// Seed layout for the program to derive against, when not this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_id: Option<IdlSeed>,
}

/// A seed component for PDA derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum IdlSeed {
    #[serde(rename = "const")]
    Const {
        #[serde(rename = "type")]
        type_: IdlType,
        value: Value,
    },
    #[serde(rename = "arg")]
    Arg {
        #[serde(rename = "type")]
        type_: IdlType,
        path: String,
    },
    #[serde(rename = "account")]
    Account {
        #[serde(rename = "type")]
        type_: IdlType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        account: Option<String>,
        path: String,
    },
}

impl IdlSeed {
    pub fn kind(&self) -> &'static str {
        match self {
            IdlSeed::Const { .. } => "const",
            IdlSeed::Arg { .. } => "arg",
            IdlSeed::Account { .. } => "account",
        }
    }

    pub fn type_(&self) -> &IdlType {
        match self {
            IdlSeed::Const { type_, .. } | IdlSeed::Arg { type_, .. } | IdlSeed::Account { type_, .. } => type_,
        }
    }
}

/// A named, typed field (instruction arg or struct field).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: IdlType,
}

/// Type representation in the IDL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdlType {
    Primitive(String),
    Vec { vec: Box<IdlType> },
    Option { option: Box<IdlType> },
    Defined { defined: String },
    Array { array: (Box<IdlType>, usize) },
}

/// Account or user type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlTypeDef {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: Value,
}

/// Error definition in the IDL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdlError {
    pub code: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl Idl {
    pub fn from_json(json: &str) -> InspectorResult<Self> {
        serde_json::from_str(json).map_err(|e| InspectorError::idl(format!("invalid IDL JSON: {}", e)))
    }

    pub fn from_file(path: impl AsRef<Path>) -> InspectorResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| InspectorError::idl(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Program address from `metadata.address`, if the IDL carries one.
    pub fn program_id(&self) -> InspectorResult<Option<Pubkey>> {
        let Some(address) = self.metadata.as_ref().and_then(|m| m.address.as_deref()) else {
            return Ok(None);
        };
        Pubkey::parse_program_id(address).map(Some)
    }

    pub fn instruction(&self, name: &str) -> InspectorResult<&IdlInstruction> {
        self.instructions
            .iter()
            .find(|ix| ix.name == name)
            .ok_or_else(|| InspectorError::idl(format!("no instruction named '{}'", name)))
    }
}

impl IdlInstruction {
    /// Leaf accounts in declaration order, with nested groups expanded.
    pub fn flat_accounts(&self) -> Vec<&IdlAccount> {
        fn walk<'a>(items: &'a [IdlAccountItem], out: &mut Vec<&'a IdlAccount>) {
            for item in items {
                match item {
                    IdlAccountItem::Account(acc) => out.push(acc),
                    IdlAccountItem::Group(group) => walk(&group.accounts, out),
                }
            }
        }
        let mut out = vec![];
        walk(&self.accounts, &mut out);
        out
    }

    pub fn account(&self, name: &str) -> InspectorResult<&IdlAccount> {
        self.flat_accounts()
            .into_iter()
            .find(|acc| acc.name == name)
            .ok_or_else(|| {
                InspectorError::idl(format!("instruction '{}' has no account '{}'", self.name, name))
            })
    }

    pub fn arg(&self, name: &str) -> Option<&IdlField> {
        self.args.iter().find(|a| a.name == name)
    }
}
