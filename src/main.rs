use marmot::repl;

fn main() {
    tracing_subscriber::fmt().init();

    println!("Welcome to the Marmot programming language.");
    println!("Type in a program to see how it parses.");
    repl::start_repl();
}
