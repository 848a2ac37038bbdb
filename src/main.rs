use std::fs;
use std::path::PathBuf;

use clap::Parser;
use exam_gen::{Exam, ExamConfig, ExamError};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV or JSON file to load the question bank from
    #[arg(short, long)]
    bank: PathBuf,

    /// Course name placed in the document headers
    #[arg(short, long)]
    course: String,

    /// Term placed in the document headers, e.g. "August 2026"
    #[arg(short, long)]
    term: String,

    /// Number of questions to include in the exam
    #[arg(short = 'n', long, default_value_t = 25)]
    size: usize,

    /// Directory to write the exam and answer key into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error generating exam: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), ExamError> {
    let config = ExamConfig {
        course_name: args.course,
        term: args.term,
        exam_size: args.size,
    };

    let is_json = args
        .bank
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let exam = if is_json {
        Exam::from_json(&args.bank, config)?
    } else {
        Exam::from_csv(&args.bank, config)?
    };

    let config = exam.config();
    let exam_path = args
        .out_dir
        .join(format!("{} {} EXAM.txt", config.course_name, config.term));
    let key_path = args.out_dir.join(format!(
        "{} {} ANSWER KEY.txt",
        config.course_name, config.term
    ));

    fs::write(&exam_path, exam.render_exam())?;
    fs::write(&key_path, exam.render_answer_key())?;

    println!("Wrote {}", exam_path.display());
    println!("Wrote {}", key_path.display());
    Ok(())
}
