/*!
The file-driven behaviour: read `input.txt`, inspect the first line for
`PARSE`/`SAT`, and print the fixed sentences.

A thin `main.rs` plumbing arguments and I/O to small, directly testable
functions, rather than burying the logic inside `fn main`.
*/

pub mod driver;

pub use driver::run;
