use std::error::Error;
use std::fs::File;
use std::process::ExitCode;

use clap::Parser;

use enfarust_automata::has_epsilon_cycle;
use enfarust_automata::TransitionIndex;
use enfarust_io::io_json::read_automaton;

#[derive(Parser, Debug)]
#[command(
    name = "Maurice Laveaux",
    about = "A tool that prints information about an automaton",
)]
struct Cli {
    #[arg(value_name = "FILE")]
    automaton: String,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();

    let file = File::open(cli.automaton)?;
    let automaton = read_automaton(file)?;

    println!("{automaton}");
    println!(
        "Number of epsilon transitions: {}",
        automaton.num_of_epsilon_transitions()
    );

    match TransitionIndex::new(&automaton) {
        Ok(index) => {
            println!("Well-formed: yes");
            println!(
                "Contains an epsilon cycle: {}",
                if has_epsilon_cycle(&index) { "yes" } else { "no" }
            );
        }
        Err(error) => {
            println!("Well-formed: no ({error})");
        }
    }

    Ok(ExitCode::SUCCESS)
}
