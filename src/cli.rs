use clap::{Parser, Subcommand};
use task_list::todo::Filter;

#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(about = "A terminal task list with open/done filters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task to the top of the list
    Add {
        text: String,
    },
    /// Print the tasks
    List {
        /// Which tasks to show: all, open or done
        #[arg(short, long, default_value_t = Filter::All)]
        filter: Filter,
    },
    /// Remove every done task
    ClearDone,
    /// Write a default config file if none exists and print its path
    Config,
}
