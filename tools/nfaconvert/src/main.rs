use std::fs::File;
use std::io::stdout;
use std::io::BufWriter;

use anyhow::Result;
use clap::Parser;

use enfarust_automata::eliminate_epsilon;
use enfarust_io::io_json::read_automaton;
use enfarust_io::io_json::write_automaton;
use enfarust_io::io_json::write_conversion;

#[derive(Parser, Debug)]
#[command(
    name = "Maurice Laveaux",
    about = "A tool that removes the epsilon transitions of an automaton",
)]
pub struct Cli {
    #[arg(value_name = "FILE")]
    automaton: String,

    output: Option<String>,

    /// Write only the converted automaton, without the epsilon closures.
    #[arg(long)]
    nfa_only: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let file = File::open(cli.automaton)?;
    let enfa = read_automaton(file)?;

    let conversion = eliminate_epsilon(&enfa)?;

    if let Some(output) = cli.output {
        let mut writer = BufWriter::new(File::create(output)?);
        if cli.nfa_only {
            write_automaton(&mut writer, &conversion.nfa)?;
        } else {
            write_conversion(&mut writer, &conversion)?;
        }
    } else if cli.nfa_only {
        write_automaton(&mut stdout(), &conversion.nfa)?;
    } else {
        write_conversion(&mut stdout(), &conversion)?;
    }

    Ok(())
}
