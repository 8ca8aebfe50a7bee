//! Command handlers. Each returns a displayable error; `main` reports it.

use std::path::Path;

use anchor_inspector_core::idl::Idl;
use anchor_inspector_core::pda::derive_pda;
use anchor_inspector_core::pubkey::Pubkey;
use anchor_inspector_core::seed::{classify_all, Seed};
use anchor_inspector_core::store::AddressBook;
use log::{debug, info};

use crate::cli::{parse_instruction_args, print_instruction_help, AddressCommand, Cli, Command, IdlCommand};
use crate::hex::{decode_pubkey, hex_encode};
use crate::inspect::print_idl;
use crate::pda::{compute_pda_from_seeds, required_flags};
use crate::storage::{default_store_path, FileStore};

pub fn run(cli: Cli) -> Result<(), String> {
    let store_path = cli.store.clone().unwrap_or_else(default_store_path);
    match cli.command {
        Command::Pda { program_id, show_bump, save, seeds } => {
            run_pda(&program_id, &seeds, show_bump, save.as_deref(), &store_path)
        }
        Command::Classify { seeds } => {
            print_seeds(&seeds, &classify_all(&seeds));
            Ok(())
        }
        Command::Address(cmd) => run_address(cmd, &store_path),
        Command::Idl(IdlCommand::Show { file }) => {
            let idl = load_idl(&file)?;
            print_idl(&idl);
            Ok(())
        }
        Command::Idl(IdlCommand::Pda { file, instruction, account, program_id, rest }) => {
            run_idl_pda(&file, &instruction, &account, program_id.as_deref(), &rest)
        }
    }
}

fn open_book(path: &Path) -> Result<AddressBook<FileStore>, String> {
    info!("address book: {}", path.display());
    AddressBook::load(FileStore::new(path)).map_err(|e| e.to_string())
}

fn load_idl(path: &Path) -> Result<Idl, String> {
    let idl = Idl::from_file(path).map_err(|e| e.to_string())?;
    debug!("loaded IDL '{}' with {} instruction(s)", idl.name, idl.instructions.len());
    Ok(idl)
}

fn print_seeds(raws: &[String], seeds: &[Seed]) {
    println!("🌱 Seeds:");
    for (i, (raw, seed)) in raws.iter().zip(seeds).enumerate() {
        println!(
            "  [{}] {:<7} {:?} → 0x{} ({} bytes)",
            i, seed.kind(), raw, hex_encode(seed.data()), seed.data().len()
        );
    }
}

fn run_pda(
    raw_program_id: &str,
    raw_seeds: &[String],
    show_bump: bool,
    save: Option<&str>,
    store_path: &Path,
) -> Result<(), String> {
    let program_id = Pubkey::parse_program_id(raw_program_id).map_err(|e| e.to_string())?;
    let seeds = classify_all(raw_seeds);
    for seed in &seeds {
        debug!("classified seed as {} ({} bytes)", seed.kind(), seed.data().len());
    }
    print_seeds(raw_seeds, &seeds);

    let pda = derive_pda(&seeds, &program_id).map_err(|e| e.to_string())?;
    println!();
    println!("📍 Address: {}", pda.address);
    if show_bump {
        println!("   Bump: {}", pda.bump);
    }

    if let Some(name) = save {
        let mut book = open_book(store_path)?;
        book.add(pda.address, Some(name)).map_err(|e| e.to_string())?;
        println!("💾 Saved as '{}'", name);
    }
    Ok(())
}

fn run_address(cmd: AddressCommand, store_path: &Path) -> Result<(), String> {
    let mut book = open_book(store_path)?;
    match cmd {
        AddressCommand::List => {
            if book.list().is_empty() {
                println!("📭 No saved addresses");
            }
            for entry in book.list() {
                println!("  {:<24} {}", entry.id, entry.key);
            }
        }
        AddressCommand::Add { key, id } => {
            let key = decode_pubkey(&key)?;
            let entry = book.add(key, id.as_deref()).map_err(|e| e.to_string())?;
            println!("💾 {} → {}", entry.id, entry.key);
        }
        AddressCommand::Remove { id } => {
            if !book.remove(&id).map_err(|e| e.to_string())? {
                return Err(format!("No saved address named '{}'", id));
            }
            println!("🗑️  Removed '{}'", id);
        }
    }
    Ok(())
}

fn run_idl_pda(
    file: &Path,
    instruction: &str,
    account: &str,
    raw_program_id: Option<&str>,
    rest: &[String],
) -> Result<(), String> {
    let idl = load_idl(file)?;
    let ix = idl.instruction(instruction).map_err(|e| e.to_string())?;
    let args = parse_instruction_args(rest);
    if args.contains_key("help") {
        print_instruction_help(ix);
        return Ok(());
    }

    let acc = ix.account(account).map_err(|e| e.to_string())?;
    let pda = acc
        .pda
        .as_ref()
        .ok_or_else(|| format!("Account '{}' of '{}' is not a PDA", account, instruction))?;

    let program_id = match raw_program_id {
        Some(raw) => Pubkey::parse_program_id(raw).map_err(|e| e.to_string())?,
        None => idl
            .program_id()
            .map_err(|e| e.to_string())?
            .ok_or("IDL has no metadata.address; pass --program-id")?,
    };

    let missing: Vec<String> = required_flags(pda)
        .into_iter()
        .filter(|flag| !args.contains_key(flag))
        .map(|flag| format!("--{}", flag))
        .collect();
    if !missing.is_empty() {
        return Err(format!("Missing seed inputs: {}", missing.join(", ")));
    }

    let result = compute_pda_from_seeds(pda, &program_id, &args)?;
    println!("📍 {}.{}", ix.name, acc.name);
    println!("   Address: {}", result.address);
    println!("   Bump:    {}", result.bump);
    Ok(())
}
