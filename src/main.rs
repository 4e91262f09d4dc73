use anyhow::Context;
use clap::Parser;
use rustdoc_graph::cli::{Cli, Commands};
use rustdoc_graph::config::{Config, read_document};
use rustdoc_graph::model::{ItemEnum, Type};
use rustdoc_graph::resolve::parse_path;
use rustdoc_graph::{Decoded, Id, ItemRef, Node, Resolver, decode_slice};
use std::path::Path;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    rustdoc_graph::tracing::init(config.log_format);

    match cli.command {
        Commands::Check {
            file,
            strict,
            deny_diagnostics,
            max_input_bytes,
        } => {
            config.strict |= strict;
            if let Some(limit) = max_input_bytes {
                config.max_input_bytes = limit;
            }
            check(&file, &config, deny_diagnostics)
        }
        Commands::Lookup {
            file,
            query,
            limit,
            max_input_bytes,
        } => {
            if let Some(limit) = max_input_bytes {
                config.max_input_bytes = limit;
            }
            let decoded = load(&file, &config)?;
            Ok(lookup(Resolver::new(&decoded.krate), &query, limit))
        }
    }
}

fn load(file: &Path, config: &Config) -> anyhow::Result<Decoded> {
    let bytes = read_document(file, config.max_input_bytes)?;
    tracing::info!(path = %file.display(), bytes = bytes.len(), "decoding");
    decode_slice(&bytes, &config.decode_options())
        .with_context(|| format!("Failed to decode {}", file.display()))
}

fn check(file: &Path, config: &Config, deny_diagnostics: bool) -> anyhow::Result<ExitCode> {
    let decoded = load(file, config)?;
    let resolver = Resolver::new(&decoded.krate);

    println!(
        "{} {}",
        resolver.crate_name().unwrap_or("<unnamed>"),
        resolver.crate_version().unwrap_or("<no version>")
    );
    println!(
        "  {} items, {} paths, {} external crates",
        decoded.krate.index.len(),
        decoded.krate.paths.len(),
        decoded.krate.external_crates.len()
    );

    if decoded.diagnostics.is_empty() {
        println!("  no diagnostics");
        return Ok(ExitCode::SUCCESS);
    }
    println!("  {} diagnostics:", decoded.diagnostics.len());
    for diagnostic in &decoded.diagnostics {
        println!("    {}", diagnostic);
    }
    Ok(if deny_diagnostics {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn lookup(resolver: Resolver<'_>, query: &str, limit: usize) -> ExitCode {
    let node = resolver
        .get(&Id::from(query))
        .or_else(|| resolver.find_by_path(&parse_path(query)));

    let Some(node) = node else {
        println!("nothing found for `{}`", query);
        let suggestions = resolver.suggest_paths(query, limit);
        if !suggestions.is_empty() {
            println!("did you mean:");
            for suggestion in suggestions {
                println!(
                    "  {} ({}, {:.2})",
                    suggestion.path(),
                    suggestion.id(),
                    suggestion.score()
                );
            }
        }
        return ExitCode::FAILURE;
    };

    println!("{} {}", node.kind(), node.id());
    if let Some(path) = node.path() {
        println!("  path: {}", path);
    }
    if let Some(item) = node.as_item() {
        describe(resolver, item);
    }
    ExitCode::SUCCESS
}

fn describe(resolver: Resolver<'_>, item: ItemRef<'_, rustdoc_graph::Item>) {
    if let Some(generics) = item.inner().generics() {
        let params: Vec<&str> = generics
            .explicit_params()
            .map(|param| param.name.as_str())
            .collect();
        if !params.is_empty() {
            println!("  generics: <{}>", params.join(", "));
        }
    }
    if item.is_stripped() {
        println!("  (incomplete: some members are private)");
    }

    let children: Vec<Node<'_>> = resolver.children_of(item).collect();
    if !children.is_empty() {
        println!("  children:");
        for child in children {
            println!("    {} {}", child.kind(), child.name().unwrap_or("_"));
        }
    }

    let impls = resolver.implementations_of(item);
    if !impls.is_empty() {
        println!("  implementations:");
        for imp in impls {
            if let ItemEnum::Impl(block) = imp.inner() {
                match &block.trait_ {
                    Some(trait_) => println!(
                        "    impl {} for {}",
                        type_name(resolver, trait_),
                        type_name(resolver, &block.for_)
                    ),
                    None => println!("    impl {}", type_name(resolver, &block.for_)),
                }
            }
        }
    }
}

/// Short display name of a type, using `paths` for resolved paths.
fn type_name(resolver: Resolver<'_>, ty: &Type) -> String {
    match ty {
        Type::ResolvedPath(path) => resolver
            .path_of(&path.id)
            .map_or_else(|| path.name.clone(), |path| path.to_string()),
        Type::Generic { name } | Type::Primitive { name } => name.clone(),
        Type::BorrowedRef {
            is_mutable, type_, ..
        } => format!(
            "&{}{}",
            if *is_mutable { "mut " } else { "" },
            type_name(resolver, type_)
        ),
        Type::Slice { type_ } => format!("[{}]", type_name(resolver, type_)),
        Type::Tuple { types } => {
            let names: Vec<String> = types.iter().map(|ty| type_name(resolver, ty)).collect();
            format!("({})", names.join(", "))
        }
        _ => "_".to_string(),
    }
}
