use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use kata::{
    custom_fizzbuzz, fibonacci, find_max_subarray_sum, fizzbuzz, is_palindrome, max_subarray,
    reverse_string, two_sum, IndexPair, RuleSet, Subarray,
};

mod cli;
use cli::display::{
    bool_badge, label_list, not_found, row, section_bot, section_top, themed, value_list, BOLD,
    CYAN,
};
use cli::{Cli, Commands};

#[derive(Serialize)]
struct LabelsReport<'a> {
    n: u64,
    labels: &'a [String],
}

#[derive(Serialize)]
struct ReverseReport<'a> {
    input: &'a str,
    reversed: &'a str,
}

#[derive(Serialize)]
struct PalindromeReport<'a> {
    input: &'a str,
    palindrome: bool,
}

/// Terms are strings: they outgrow every JSON number type past `F(93)`.
#[derive(Serialize)]
struct FibonacciReport {
    n: i64,
    terms: Vec<String>,
}

#[derive(Serialize)]
struct SubarrayReport {
    sum: i128,
    witness: Option<Subarray>,
}

#[derive(Serialize)]
struct TwoSumReport {
    target: i64,
    pair: Option<IndexPair>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => run_demo(),
        Commands::Fizzbuzz { n, rules } => {
            let labels = if rules.is_empty() {
                fizzbuzz(n)
            } else {
                custom_fizzbuzz(n, &rules.into_iter().collect::<RuleSet>())
            };
            if json {
                emit_json(&LabelsReport {
                    n,
                    labels: &labels,
                })
            } else {
                println!("{}", labels.join("\n"));
                Ok(())
            }
        }
        Commands::Reverse { text } => {
            let reversed = reverse_string(&text);
            if json {
                emit_json(&ReverseReport {
                    input: &text,
                    reversed: &reversed,
                })
            } else {
                println!("{}", reversed);
                Ok(())
            }
        }
        Commands::Palindrome { text } => {
            let palindrome = is_palindrome(&text);
            if json {
                emit_json(&PalindromeReport {
                    input: &text,
                    palindrome,
                })
            } else {
                println!("{}", bool_badge(palindrome));
                Ok(())
            }
        }
        Commands::Fibonacci { n } => {
            let terms: Vec<String> = fibonacci(n).iter().map(|t| t.to_string()).collect();
            if json {
                emit_json(&FibonacciReport { n, terms })
            } else {
                println!("{}", terms.join("\n"));
                Ok(())
            }
        }
        Commands::MaxSubarray { values, witness } => {
            let best = max_subarray(&values);
            let sum = best.map_or(0, |sub| sub.sum);
            if json {
                emit_json(&SubarrayReport {
                    sum,
                    witness: best.filter(|_| witness),
                })
            } else {
                println!("{}", sum);
                if witness {
                    match best {
                        Some(sub) => println!(
                            "range [{}, {}): {}",
                            sub.start,
                            sub.end,
                            value_list(&values[sub.start..sub.end])
                        ),
                        None => println!("{}", not_found()),
                    }
                }
                Ok(())
            }
        }
        Commands::TwoSum { target, values } => {
            let pair = two_sum(&values, target);
            if json {
                emit_json(&TwoSumReport { target, pair })
            } else {
                match pair {
                    Some(pair) => println!("{}", pair),
                    None => println!("{}", not_found()),
                }
                Ok(())
            }
        }
    }
}

/// Write one JSON document followed by a newline.
fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).context("failed to serialize output")?;
    writeln!(out).context("failed to write stdout")?;
    Ok(())
}

/// Every operation once, on the same sample inputs each time.
fn run_demo() -> Result<()> {
    let demo_rules = RuleSet::new([(2, "Even"), (3, "Three"), (5, "Five")])
        .context("invalid demo rules")?;
    let subarray_sample = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
    let two_sum_sample = [2, 7, 11, 15];

    section_top("FizzBuzz (1-20)");
    row(&label_list(&fizzbuzz(20)));
    section_bot();

    section_top("Custom FizzBuzz (1-15)");
    row(&themed(CYAN, &[], "rules: 2=Even 3=Three 5=Five"));
    row(&label_list(&custom_fizzbuzz(15, &demo_rules)));
    section_bot();

    section_top("Palindrome Check");
    for word in ["racecar", "hello"] {
        row(&format!("'{}' is palindrome: {}", word, bool_badge(is_palindrome(word))));
    }
    row(&format!("'hello' reversed: '{}'", reverse_string("hello")));
    section_bot();

    section_top("Fibonacci (first 10)");
    row(&value_list(&fibonacci(10)));
    section_bot();

    section_top("Maximum Subarray Sum");
    row(&format!("input: {}", value_list(&subarray_sample)));
    row(&format!(
        "max sum: {}",
        themed(CYAN, &[BOLD], &find_max_subarray_sum(&subarray_sample).to_string())
    ));
    section_bot();

    section_top("Two Sum");
    row(&format!("input: {}, target: 9", value_list(&two_sum_sample)));
    let indices = match two_sum(&two_sum_sample, 9) {
        Some(pair) => pair.to_string(),
        None => not_found(),
    };
    row(&format!("indices: {}", indices));
    section_bot();

    Ok(())
}
