//! Interactive command shell for slotdb.
//!
//! The shell owns everything the storage core treats as external: line
//! reading, the two-keyword parser, and rendering. It turns raw input
//! into [`Statement`] values and prints whatever the executor reports.

use std::io::{self, Write};

use slotdb::{execute_statement, Error, Row, Statement, StatementResult, Table};

struct InputBuffer {
    buffer: String,
}

impl InputBuffer {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Read one line, trimmed. Returns false on EOF.
    fn read_input(&mut self) -> bool {
        self.buffer.clear();
        let bytes_read = io::stdin()
            .read_line(&mut self.buffer)
            .expect("failed to read line");
        self.buffer = self.buffer.trim().to_string();
        bytes_read > 0
    }
}

enum MetaCommand {
    Exit,
    Unrecognized,
}

impl MetaCommand {
    fn parse(input: &str) -> Option<MetaCommand> {
        if !input.starts_with('.') {
            return None;
        }
        match input {
            ".exit" => Some(MetaCommand::Exit),
            _ => Some(MetaCommand::Unrecognized),
        }
    }
}

enum ParseError {
    UnrecognizedKeyword,
    SyntaxError,
    NegativeId,
}

/// Parse one of the two statement shapes: `insert <id> <username> <email>`
/// or `select`. Field lengths are not checked here; the codec owns that.
fn parse_statement(input: &str) -> Result<Statement, ParseError> {
    let mut tokens = input.split_whitespace();

    match tokens.next() {
        Some("insert") => {
            let (id, username, email) = match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(id), Some(username), Some(email)) => (id, username, email),
                _ => return Err(ParseError::SyntaxError),
            };
            if tokens.next().is_some() {
                return Err(ParseError::SyntaxError);
            }

            if id.starts_with('-') {
                return Err(ParseError::NegativeId);
            }
            let id: u32 = id.parse().map_err(|_| ParseError::SyntaxError)?;

            Ok(Statement::Insert(Row::new(id, username, email)))
        }
        Some("select") => {
            if tokens.next().is_some() {
                return Err(ParseError::SyntaxError);
            }
            Ok(Statement::Select)
        }
        _ => Err(ParseError::UnrecognizedKeyword),
    }
}

fn print_prompt() {
    print!("db > ");
    io::stdout().flush().expect("failed to flush stdout");
}

fn print_result(result: StatementResult) {
    if let StatementResult::Rows(rows) = result {
        for row in rows {
            println!("{}", row);
        }
    }
    println!("Executed.");
}

fn print_error(err: Error) {
    match err {
        Error::FieldTooLong { .. } => println!("String is too long."),
        Error::TableFull => println!("Error: Table full."),
        err => println!("Error: {}.", err),
    }
}

fn main() {
    let mut table = Table::new();
    let mut input_buffer = InputBuffer::new();

    loop {
        print_prompt();
        if !input_buffer.read_input() {
            break;
        }

        if let Some(meta) = MetaCommand::parse(&input_buffer.buffer) {
            match meta {
                MetaCommand::Exit => break,
                MetaCommand::Unrecognized => {
                    println!("Unrecognized command '{}'.", input_buffer.buffer);
                }
            }
            continue;
        }

        match parse_statement(&input_buffer.buffer) {
            Ok(statement) => match execute_statement(&mut table, statement) {
                Ok(result) => print_result(result),
                Err(err) => print_error(err),
            },
            Err(ParseError::UnrecognizedKeyword) => {
                println!("Unrecognized keyword at start of '{}'.", input_buffer.buffer);
            }
            Err(ParseError::SyntaxError) => {
                println!("Syntax error. Could not parse statement.");
            }
            Err(ParseError::NegativeId) => {
                println!("ID must be positive.");
            }
        }
    }
}
