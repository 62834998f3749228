// Report - terminal rendering of the similarity matrix

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use note_similarity::{
    config::{LABEL_WIDTH, MAX_TABLE_COLUMNS},
    Document, SimilarityMatrix, TFIDFVectorizer,
};

/// Heat color of a score
fn heat(score: f64) -> ColoredString {
    let cell = format!("{:>7.4}", score);
    if score >= 0.75 {
        cell.bright_red().bold()
    } else if score >= 0.5 {
        cell.yellow()
    } else if score >= 0.25 {
        cell.green()
    } else if score > 0.0 {
        cell.blue()
    } else {
        cell.dimmed()
    }
}

fn fit_label(label: &str) -> String {
    if label.chars().count() <= LABEL_WIDTH {
        return label.to_string();
    }
    let head: String = label.chars().take(LABEL_WIDTH - 1).collect();
    format!("{head}~")
}

pub fn header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!("─── {} ───", title).bright_blue().bold())
}

/// Heat table of the full matrix. Columns are numbered and listed under the
/// table. Skipped when the matrix is too wide for a terminal.
pub fn write_table<W: Write>(out: &mut W, matrix: &SimilarityMatrix) -> io::Result<()> {
    let labels: Vec<&str> = matrix.labels().collect();
    if labels.len() > MAX_TABLE_COLUMNS {
        writeln!(
            out,
            "{}",
            format!(
                "{} documents: table omitted (max {}), use --format json for the full matrix",
                labels.len(),
                MAX_TABLE_COLUMNS
            )
            .dimmed()
        )?;
        return Ok(());
    }

    header(out, "Similarity")?;
    write!(out, "{:width$}", "", width = LABEL_WIDTH + 1)?;
    for i in 0..labels.len() {
        write!(out, " {:>7}", format!("[{}]", i + 1).bright_blue())?;
    }
    writeln!(out)?;

    for (i, row_label) in labels.iter().enumerate() {
        write!(out, "{:<width$} ", fit_label(row_label), width = LABEL_WIDTH)?;
        for col_label in &labels {
            match matrix.get(row_label, col_label) {
                Some(score) => write!(out, " {}", heat(score))?,
                None => write!(out, " {:>7}", "-".dimmed())?,
            }
        }
        writeln!(out, "  {}", format!("[{}]", i + 1).bright_blue())?;
    }
    Ok(())
}

/// Most similar pairs, best first
pub fn write_ranked<W: Write>(
    out: &mut W,
    matrix: &SimilarityMatrix,
    top: usize,
) -> io::Result<()> {
    let mut hits = matrix.ranked_pairs();
    if hits.is_empty() {
        return Ok(());
    }
    let total = hits.len();
    hits.truncate(top);

    header(out, &format!("Top {} of {} pairs", hits.len(), total))?;
    for (left, right, score) in &hits.list {
        writeln!(out, "  {}  {} {} {}", heat(*score), left, "<->".dimmed(), right)?;
    }
    Ok(())
}

/// Paths and vocabulary of the run
pub fn write_dump<W: Write>(
    out: &mut W,
    documents: &[Document],
    vectorizer: &TFIDFVectorizer,
) -> io::Result<()> {
    header(out, "Documents")?;
    for doc in documents {
        writeln!(out, "  {}", doc.id)?;
    }

    let vocabulary = vectorizer.vocabulary();
    header(out, &format!("Vocabulary ({} terms)", vocabulary.len()))?;
    let terms: Vec<&str> = vocabulary.iter().collect();
    writeln!(out, "  {}", terms.join(" "))
}

pub fn write_summary<W: Write>(
    out: &mut W,
    vectorizer: &TFIDFVectorizer,
    elapsed_secs: f32,
) -> io::Result<()> {
    header(out, "Summary")?;
    writeln!(out, "  {} {}", "Documents:".bright_blue(), vectorizer.doc_num())?;
    writeln!(out, "  {} {}", "Vocabulary:".bright_blue(), vectorizer.vocabulary().len())?;
    writeln!(out, "  {} {:.2}s", "Duration:".bright_blue(), elapsed_secs)?;
    writeln!(out)
}
