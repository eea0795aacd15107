/*!
A simple file-driven CLI for the tableau decision procedure.

# Use

```sh
tableau_cli [input.txt]
```

Line 1 of the input file is a mode header containing `PARSE` and/or `SAT`;
the remaining lines each hold one formula.
*/

use std::fs::File;
use std::io::{BufReader, BufWriter};

use logic_tableau::cli::driver;
use logic_tableau::config::Config;
use logic_tableau::session::Session;

mod args;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let path = args::input_path(&args);

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open '{path}': {e}");
            std::process::exit(1);
        }
    };

    let mut session = Session::new(Config::default());
    let stdout = std::io::stdout();
    let mut output = BufWriter::new(stdout.lock());

    if let Err(e) = driver::run(BufReader::new(file), &mut output, &mut session) {
        eprintln!("I/O error while reading '{path}': {e}");
        std::process::exit(1);
    }
}
