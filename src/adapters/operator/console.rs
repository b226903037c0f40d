use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::core::errors::Result;
use crate::core::traits::operator::Operator;

/// Operator that asks on stdout and reads answers from stdin.
pub struct ConsoleOperator;

impl ConsoleOperator {
    pub fn new() -> Self {
        Self
    }

    fn read_line() -> Result<String> {
        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }

    fn print_options(options: &[String], default: Option<usize>) {
        for (i, option) in options.iter().enumerate() {
            let number = i + 1;
            if Some(i) == default {
                println!("  {number}) {} {}", option, "(default)".dimmed());
            } else {
                println!("  {number}) {option}");
            }
        }
    }
}

impl Default for ConsoleOperator {
    fn default() -> Self {
        Self::new()
    }
}

/// Interpret a yes/no reply. An empty reply takes the default;
/// `None` means unrecognized and the question is asked again.
fn parse_yes_no(answer: &str, default: bool) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

impl Operator for ConsoleOperator {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };

        // Re-ask until the answer is recognizable, like the pickers do
        loop {
            print!("  {prompt} {hint}: ");
            io::stdout().flush()?;

            match parse_yes_no(&Self::read_line()?, default) {
                Some(answer) => return Ok(answer),
                None => println!("  Answer y or n."),
            }
        }
    }

    fn choose_one(&self, prompt: &str, options: &[String], default: usize) -> Result<String> {
        println!("  {prompt}:");
        Self::print_options(options, Some(default));

        // Re-ask until the answer is a listed number
        loop {
            print!("  Choice [{}]: ", default + 1);
            io::stdout().flush()?;

            let answer = Self::read_line()?;
            if answer.is_empty() {
                return Ok(options[default].clone());
            }
            match answer.parse::<usize>() {
                Ok(n) if n >= 1 && n <= options.len() => return Ok(options[n - 1].clone()),
                _ => println!("  Enter a number between 1 and {}.", options.len()),
            }
        }
    }

    fn choose_many(&self, prompt: &str, options: &[String]) -> Result<Vec<String>> {
        println!("  {prompt}:");
        Self::print_options(options, None);

        loop {
            print!("  Numbers, comma-separated (empty for none): ");
            io::stdout().flush()?;

            let answer = Self::read_line()?;
            if answer.is_empty() {
                return Ok(Vec::new());
            }

            let mut picked = Vec::new();
            let mut valid = true;
            for part in answer.split(',') {
                match part.trim().parse::<usize>() {
                    Ok(n) if n >= 1 && n <= options.len() => {
                        let choice = options[n - 1].clone();
                        if !picked.contains(&choice) {
                            picked.push(choice);
                        }
                    }
                    _ => {
                        valid = false;
                        break;
                    }
                }
            }

            if valid {
                return Ok(picked);
            }
            println!("  Enter numbers between 1 and {}.", options.len());
        }
    }

    fn input(&self, prompt: &str) -> Result<String> {
        print!("  {prompt}: ");
        io::stdout().flush()?;
        Self::read_line()
    }

    fn show(&self, message: &str) {
        println!("{message}");
    }
}
