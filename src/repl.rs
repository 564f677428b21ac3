use std::io::{stdin, stdout, Write};

use crate::{lexer::Lexer, parser::Parser};

/// Read-parse-print loop: each line is parsed on its own, and either the
/// canonical rendering of the program or the parser's errors are printed.
pub fn start_repl() {
    loop {
        print!(">> ");
        let _ = stdout().flush();

        let mut input = String::new();
        match stdin().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            for error in parser.errors() {
                println!("\t{}", error);
            }
            continue;
        }

        println!("{}", program.string());
    }
    println!("Exiting");
}
