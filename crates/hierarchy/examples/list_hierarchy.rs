//! CLI example that builds an in-memory directory tree and walks it
//!
//! Usage:
//!   RUST_LOG=trace cargo run --example list_hierarchy [threshold]
//!
//! Prints every entry, then the entries found by pruning at directories
//! whose name starts with `.` and at files of at least `threshold` bytes
//! (default 1024).

use std::env;

use hierarchy::prelude::*;

/// Whether an entry is a directory or a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    /// Can hold other entries, possibly none
    Dir,
    /// Never has children
    File,
}

/// A file or directory in the sample tree
struct Entry {
    name: &'static str,
    kind: EntryKind,
    size: u64,
    children: Vec<Entry>,
}

impl Entry {
    fn file(name: &'static str, size: u64) -> Self {
        Self {
            name,
            kind: EntryKind::File,
            size,
            children: Vec::new(),
        }
    }

    fn dir(name: &'static str, children: Vec<Entry>) -> Self {
        Self {
            name,
            kind: EntryKind::Dir,
            size: 0,
            children,
        }
    }

    fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Children paired with their depth; files report no children at all
fn children<'a>(
    &(depth, entry): &(usize, &'a Entry),
) -> anyhow::Result<Option<Vec<(usize, &'a Entry)>>> {
    if !entry.is_dir() {
        return Ok(None);
    }
    Ok(Some(entry.children.iter().map(|child| (depth + 1, child)).collect()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let threshold: u64 = if args.len() > 1 { args[1].parse()? } else { 1024 };

    let root = Entry::dir(
        "project",
        vec![
            Entry::file("Cargo.toml", 412),
            Entry::dir(
                "src",
                vec![
                    Entry::file("lib.rs", 2_310),
                    Entry::dir(
                        "traverse",
                        vec![Entry::file("mod.rs", 5_120), Entry::file("walk.rs", 980)],
                    ),
                ],
            ),
            Entry::dir(".git", vec![Entry::file("HEAD", 23), Entry::file("index", 8_192)]),
            Entry::dir("target", Vec::new()),
        ],
    );

    println!("Directory Structure:");
    println!("═══════════════════════════════");

    let mut total_size = 0;
    traverse_all(
        Some(vec![(0, &root)]),
        children,
        Some(|&(depth, entry): &(usize, &Entry)| {
            let icon = if entry.is_dir() { "📁" } else { "📄" };
            println!("{}{} {} ({} B)", "  ".repeat(depth), icon, entry.name, entry.size);
            total_size += entry.size;
            Ok(())
        }),
    )?;

    println!("═══════════════════════════════");
    println!("Total size: {} B", total_size);
    println!();

    let mut found = Vec::new();
    Traversal::with_strategy(Strategy::WorkStack).traverse(
        Some(vec![(0, &root)]),
        children,
        Some(|&(_, entry): &(usize, &Entry)| {
            Ok(entry.name.starts_with('.') || entry.size >= threshold)
        }),
        Some(|&(_, entry): &(usize, &Entry)| {
            found.push(entry.name);
            Ok(())
        }),
    )?;

    println!("Pruned at {} entries (threshold {} B):", found.len(), threshold);
    for name in &found {
        println!("  {}", name);
    }

    Ok(())
}
