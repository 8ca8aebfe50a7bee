//! IDL inspection: print a program's interface.

use anchor_inspector_core::idl::Idl;

use crate::cli::{account_flags, idl_type_display, seed_display};

/// Print every instruction with its accounts, PDA seed layouts and args.
pub fn print_idl(idl: &Idl) {
    println!("📦 {} v{}", idl.name, idl.version);
    match idl.program_id() {
        Ok(Some(id)) => println!("   Program ID: {}", id),
        Ok(None) => println!("   Program ID: (not in metadata)"),
        Err(e) => println!("   Program ID: ⚠️  {}", e),
    }
    println!();

    println!("INSTRUCTIONS:");
    for ix in &idl.instructions {
        let args: Vec<String> = ix
            .args
            .iter()
            .map(|a| format!("{}: {}", a.name, idl_type_display(&a.type_)))
            .collect();
        println!("  {}({})", ix.name, args.join(", "));
        for acc in ix.flat_accounts() {
            println!("    {}{}", acc.name, account_flags(acc));
            if let Some(pda) = &acc.pda {
                for seed in &pda.seeds {
                    println!("      · {}", seed_display(seed));
                }
                if let Some(program) = &pda.program_id {
                    println!("      · program: {}", seed_display(program));
                }
            }
        }
    }

    if !idl.accounts.is_empty() {
        println!();
        println!("ACCOUNT TYPES:");
        for acc in &idl.accounts {
            println!("  {}", acc.name);
        }
    }

    if !idl.errors.is_empty() {
        println!();
        println!("ERRORS:");
        for err in &idl.errors {
            println!("  {:<6} {:<24} {}", err.code, err.name, err.msg.as_deref().unwrap_or(""));
        }
    }
}
