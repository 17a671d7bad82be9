mod db;
mod models;
mod operations;

use clap::{Parser, Subcommand};
use rusqlite::Connection;

use operations::import::ImportFormat;

#[derive(Parser, Debug)]
#[command(name = "finman")]
#[command(about = "Personal finance manager", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Record and list income
    Income {
        #[command(subcommand)]
        command: IncomeCommands,
    },
    /// Record and list expenses
    Expense {
        #[command(subcommand)]
        command: ExpenseCommands,
    },
    /// Set, list and check category budgets
    Budget {
        #[command(subcommand)]
        command: BudgetCommands,
    },
    /// Expense breakdown by category
    Report {
        /// Owner user id
        #[arg(long)]
        user: i64,
    },
    /// Import expenses from a CSV file (columns: date,amount,category,description)
    Import {
        /// Owner user id
        #[arg(long)]
        user: i64,
        /// Path to the CSV file
        path: String,
    },
}

#[derive(Subcommand, Debug)]
enum UserCommands {
    /// Register a new user
    Add { username: String },
    /// List registered users
    List,
    /// Look up a user's id by name
    Find { username: String },
}

#[derive(Subcommand, Debug)]
enum IncomeCommands {
    /// Record an income entry
    Add {
        /// Owner user id
        #[arg(long)]
        user: i64,
        amount: String,
        description: String,
        /// Date in YYYY-MM-DD format
        date: String,
    },
    /// List a user's income entries
    List {
        /// Owner user id
        #[arg(long)]
        user: i64,
    },
}

#[derive(Subcommand, Debug)]
enum ExpenseCommands {
    /// Record an expense entry
    Add {
        /// Owner user id
        #[arg(long)]
        user: i64,
        amount: String,
        category: String,
        description: String,
        /// Date in YYYY-MM-DD format
        date: String,
    },
    /// List a user's expense entries
    List {
        /// Owner user id
        #[arg(long)]
        user: i64,
    },
}

#[derive(Subcommand, Debug)]
enum BudgetCommands {
    /// Set a budget for a category
    Set {
        /// Owner user id
        #[arg(long)]
        user: i64,
        category: String,
        amount: String,
    },
    /// List a user's budgets
    List {
        /// Owner user id
        #[arg(long)]
        user: i64,
    },
    /// Check spending against each budget
    Check {
        /// Owner user id
        #[arg(long)]
        user: i64,
    },
}

fn main() {
    let args = Args::parse();

    let conn = match db::connection::establish_connection() {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Failed to connect to the database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&conn, args.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(conn: &Connection, command: Commands) -> Result<(), String> {
    match command {
        Commands::User { command } => match command {
            UserCommands::Add { username } => {
                let id = operations::user::register_user_db(conn, &username)?;
                println!("User '{}' registered with id {}", username.trim(), id);
            }
            UserCommands::List => {
                for user in operations::user::list_users_db(conn)? {
                    println!("{}: {}", user.id, user.username);
                }
            }
            UserCommands::Find { username } => {
                let user = operations::user::find_user_db(conn, &username)?;
                println!("{}: {}", user.id, user.username);
            }
        },
        Commands::Income { command } => match command {
            IncomeCommands::Add {
                user,
                amount,
                description,
                date,
            } => {
                operations::record::add_income_db(conn, user, &amount, &description, &date)?;
                println!("Income added successfully!");
            }
            IncomeCommands::List { user } => {
                println!("Income Records:");
                for income in db::income_repository::get_income_for_user(conn, user)? {
                    println!(
                        "Amount: {}, Description: {}, Date: {}",
                        income.amount, income.description, income.date
                    );
                }
            }
        },
        Commands::Expense { command } => match command {
            ExpenseCommands::Add {
                user,
                amount,
                category,
                description,
                date,
            } => {
                operations::record::add_expense_db(
                    conn,
                    user,
                    &amount,
                    &category,
                    &description,
                    &date,
                )?;
                println!("Expense added successfully!");
            }
            ExpenseCommands::List { user } => {
                println!("Expense Records:");
                for expense in db::expense_repository::get_expenses_for_user(conn, user)? {
                    println!(
                        "Amount: {}, Category: {}, Description: {}, Date: {}",
                        expense.amount, expense.category, expense.description, expense.date
                    );
                }
            }
        },
        Commands::Budget { command } => match command {
            BudgetCommands::Set {
                user,
                category,
                amount,
            } => {
                operations::budget::set_budget_db(conn, user, &category, &amount)?;
                println!("Budget set successfully!");
            }
            BudgetCommands::List { user } => {
                for budget in operations::budget::list_budgets_db(conn, user)? {
                    println!("{}: {}", budget.category, budget.amount);
                }
            }
            BudgetCommands::Check { user } => {
                for status in operations::budget::check_budgets_db(conn, user)? {
                    println!(
                        "Budget for {}: {}, Spent: {}",
                        status.category, status.limit, status.spent
                    );
                    if status.exceeded {
                        println!(
                            "Warning: You have exceeded the budget for {}!",
                            status.category
                        );
                    }
                }
            }
        },
        Commands::Report { user } => {
            let breakdown = operations::report::build_expense_breakdown(conn, user)?;
            if breakdown.is_empty() {
                println!("No expenses to generate report.");
            } else {
                println!("Expense Breakdown");
                for share in &breakdown.shares {
                    println!("{}: {} ({}%)", share.category, share.total, share.share);
                }
                println!("Total spent: {}", breakdown.total_spend);
            }
        }
        Commands::Import { user, path } => {
            let count =
                operations::import::import_expenses_to_db(conn, user, ImportFormat::CSV, &path)?;
            println!("Successfully imported {} expenses.", count);
        }
    }
    Ok(())
}
