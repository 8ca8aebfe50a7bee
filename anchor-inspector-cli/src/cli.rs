//! CLI definition, help text, argument parsing, string utilities.

use std::collections::HashMap;
use std::path::PathBuf;

use anchor_inspector_core::idl::{IdlAccount, IdlInstruction, IdlSeed, IdlType};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "anchor-inspector", version, about = "Inspect Anchor IDLs, derive PDAs, keep an address book")]
pub struct Cli {
    /// Address book file (default: $ANCHOR_INSPECTOR_HOME/addresses.json, else ~/.anchor-inspector/addresses.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Derive a program address from seeds (each typed automatically)
    Pda {
        /// Program id (base58)
        #[arg(short, long, value_name = "ID")]
        program_id: String,
        /// Print the bump alongside the address
        #[arg(long)]
        show_bump: bool,
        /// Save the derived address in the address book under this name
        #[arg(long, value_name = "NAME")]
        save: Option<String>,
        /// Seeds in order: [1,2,3] bytes, base58 key, decimal number, or string
        seeds: Vec<String>,
    },
    /// Show how each input would be typed as a seed
    Classify {
        #[arg(required = true)]
        seeds: Vec<String>,
    },
    /// Manage saved addresses
    #[command(subcommand)]
    Address(AddressCommand),
    /// Inspect an Anchor IDL
    #[command(subcommand)]
    Idl(IdlCommand),
}

#[derive(Debug, Subcommand)]
pub enum AddressCommand {
    /// List saved addresses
    List,
    /// Save an address (an existing name is overwritten in place)
    Add {
        /// Address (base58 or hex)
        key: String,
        /// Name to save under (default: the address itself)
        #[arg(long)]
        id: Option<String>,
    },
    /// Remove a saved address by name
    Remove { id: String },
}

#[derive(Debug, Subcommand)]
pub enum IdlCommand {
    /// Print instructions, accounts, PDA seed layouts and args
    Show {
        file: PathBuf,
    },
    /// Derive a PDA account from its IDL seed layout
    Pda {
        file: PathBuf,
        instruction: String,
        account: String,
        /// Program id (default: metadata.address from the IDL)
        #[arg(short, long, value_name = "ID")]
        program_id: Option<String>,
        /// Seed inputs as --<arg> <VALUE> and --<account>-account <ADDRESS>
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "SEED FLAGS")]
        rest: Vec<String>,
    },
}

/// Print detailed help for a single instruction.
pub fn print_instruction_help(ix: &IdlInstruction) {
    let accounts = ix.flat_accounts();
    println!("📋 {} — {} account(s), {} arg(s)", ix.name, accounts.len(), ix.args.len());
    println!();
    println!("ACCOUNTS:");
    for acc in &accounts {
        println!("  {}{}", acc.name, account_flags(acc));
        if let Some(pda) = &acc.pda {
            for (i, seed) in pda.seeds.iter().enumerate() {
                println!("      seed[{}] {}", i, seed_display(seed));
            }
            if let Some(program) = &pda.program_id {
                println!("      program {}", seed_display(program));
            }
        }
    }
    println!();
    println!("ARGS:");
    for arg in &ix.args {
        println!("  --{:<25} {} ({}) — format: {}",
            snake_to_kebab(&arg.name), arg.name, idl_type_display(&arg.type_), idl_type_hint(&arg.type_));
    }
}

pub fn account_flags(acc: &IdlAccount) -> String {
    let mut flags = vec![];
    if acc.is_mut {
        flags.push("mut");
    }
    if acc.is_signer {
        flags.push("signer");
    }
    if acc.is_optional {
        flags.push("optional");
    }
    if acc.pda.is_some() {
        flags.push("pda");
    }
    if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(", "))
    }
}

pub fn seed_display(seed: &IdlSeed) -> String {
    match seed {
        IdlSeed::Const { type_, value } => format!("const {} = {}", idl_type_display(type_), value),
        IdlSeed::Account { type_, path, .. } => format!(
            "account {} ({}) — --{}",
            path, idl_type_display(type_), crate::pda::account_flag(path)
        ),
        IdlSeed::Arg { type_, path } => format!(
            "arg {} ({}) — --{} <{}>",
            path, idl_type_display(type_), crate::pda::path_flag(path), idl_type_hint(type_)
        ),
    }
}

/// Parse `--key value` pairs into a key-value map. A bare `--flag` maps to "true".
pub fn parse_instruction_args(args: &[String]) -> HashMap<String, String> {
    let mut map = HashMap::new();
    let mut i = 0;
    while i < args.len() {
        if let Some(key) = args[i].strip_prefix("--") {
            if i + 1 < args.len() && !args[i + 1].starts_with("--") {
                map.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                map.insert(key.to_string(), "true".to_string());
                i += 1;
            }
        } else {
            i += 1;
        }
    }
    map
}

// ─── String utilities ────────────────────────────────────────────

pub fn snake_to_kebab(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, ch) in s.chars().enumerate() {
        if ch == '_' {
            out.push('-');
        } else if ch.is_ascii_uppercase() {
            if i > 0 && !out.ends_with('-') {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

pub fn idl_type_display(ty: &IdlType) -> String {
    match ty {
        IdlType::Primitive(s) => s.clone(),
        IdlType::Vec { vec } => format!("Vec<{}>", idl_type_display(vec)),
        IdlType::Option { option } => format!("Option<{}>", idl_type_display(option)),
        IdlType::Defined { defined } => defined.clone(),
        IdlType::Array { array } => format!("[{}; {}]", idl_type_display(&array.0), array.1),
    }
}

pub fn idl_type_hint(ty: &IdlType) -> String {
    match ty {
        IdlType::Primitive(s) => match s.as_str() {
            "u8" | "u16" | "u32" | "u64" | "u128" | "i8" | "i16" | "i32" | "i64" | "i128" => "NUMBER".to_string(),
            "publicKey" | "pubkey" => "BASE58|HEX".to_string(),
            "bool" => "true|false".to_string(),
            "bytes" => "[n,..]|0xHEX".to_string(),
            _ => s.to_uppercase(),
        },
        IdlType::Vec { vec } => format!("LIST<{}>", idl_type_hint(vec)),
        IdlType::Option { option } => format!("OPT<{}>", idl_type_hint(option)),
        IdlType::Defined { defined } => defined.clone(),
        IdlType::Array { array } => match &*array.0 {
            IdlType::Primitive(p) if p == "u8" => format!("HEX{}|STR≤{}", array.1 * 2, array.1),
            _ => format!("[_; {}]", array.1),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_pda_command() {
        let cli = Cli::try_parse_from([
            "anchor-inspector", "pda", "--program-id", "X", "--show-bump", "metadata", "[1,2]",
        ])
        .unwrap();
        match cli.command {
            Command::Pda { program_id, show_bump, save, seeds } => {
                assert_eq!(program_id, "X");
                assert!(show_bump);
                assert!(save.is_none());
                assert_eq!(seeds, vec!["metadata", "[1,2]"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_idl_pda_collects_seed_flags() {
        let cli = Cli::try_parse_from([
            "anchor-inspector", "idl", "pda", "vault.json", "initialize", "vault",
            "--mint-account", "So11111111111111111111111111111111111111112", "--index", "3",
        ])
        .unwrap();
        match cli.command {
            Command::Idl(IdlCommand::Pda { rest, program_id, .. }) => {
                assert!(program_id.is_none());
                let map = parse_instruction_args(&rest);
                assert_eq!(map["index"], "3");
                assert_eq!(map["mint-account"], "So11111111111111111111111111111111111111112");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_instruction_args() {
        let args: Vec<String> = ["--a", "1", "--flag", "--b", "two", "stray"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let map = parse_instruction_args(&args);
        assert_eq!(map["a"], "1");
        assert_eq!(map["flag"], "true");
        assert_eq!(map["b"], "two");
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_snake_to_kebab() {
        assert_eq!(snake_to_kebab("token_mint"), "token-mint");
        assert_eq!(snake_to_kebab("systemProgram"), "system-program");
        assert_eq!(snake_to_kebab("index"), "index");
    }
}
