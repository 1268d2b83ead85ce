use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use std::collections::HashSet;
use std::path::Path;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, Ident, LitByteStr, LitStr, Token};

/// Ordinals must stay below the 0xFFFD..=0xFFFF sentinel codes.
const MAX_WORDS: usize = 0xFFFD;

/// Macro input representation:
/// include_wordlist!("path/to/words.txt", lowercase = true, sort = true)
struct IncludeWordlistArgs {
    path: LitStr,
    assignments: Vec<(Ident, Expr)>,
}

impl Parse for IncludeWordlistArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        // Parse first argument: a string literal path
        let path: LitStr = input.parse()?;

        let mut assignments = Vec::new();

        // Parse optional comma separated assignments
        while input.parse::<Token![,]>().is_ok() {
            // If there's nothing left after comma, break
            if input.is_empty() {
                break;
            }

            let ident: Ident = input.parse()?;
            let _eq: Token![=] = input.parse()?;
            let value: Expr = input.parse()?;

            assignments.push((ident, value));
        }

        Ok(IncludeWordlistArgs { path, assignments })
    }
}

fn bool_arg(ident: &Ident, expr: &Expr) -> syn::Result<bool> {
    match expr {
        Expr::Lit(el) => match &el.lit {
            syn::Lit::Bool(lb) => Ok(lb.value),
            other => Err(syn::Error::new_spanned(
                other,
                format!("{} must be a boolean literal", ident),
            )),
        },
        other => Err(syn::Error::new_spanned(
            other,
            format!("{} must be a boolean literal expression", ident),
        )),
    }
}

/// Check a word list against the layout the runtime search relies on and
/// lay it out as a NUL-delimited table plus offsets.
fn build_table(words: &[Vec<u8>]) -> Result<(Vec<u8>, Vec<u32>), String> {
    if words.is_empty() {
        return Err("word list contains no words".to_string());
    }
    if words.len() > MAX_WORDS {
        return Err(format!(
            "{} words do not fit below the reserved sentinel codes (max {})",
            words.len(),
            MAX_WORDS
        ));
    }

    let mut table = Vec::new();
    let mut offsets = Vec::with_capacity(words.len());
    let mut seen: HashSet<&[u8]> = HashSet::new();
    let mut finished_runs: HashSet<[u8; 2]> = HashSet::new();
    let mut current_run: Option<[u8; 2]> = None;

    for (ordinal, word) in words.iter().enumerate() {
        let shown = String::from_utf8_lossy(word);
        if word.iter().any(|&b| b == 0 || b.is_ascii_whitespace()) {
            return Err(format!(
                "word {} ({:?}) contains a NUL or whitespace",
                ordinal, shown
            ));
        }
        if !seen.insert(word.as_slice()) {
            return Err(format!("word {:?} appears more than once", shown));
        }

        // Same packing as the runtime key, minus the byte order.
        let prefix = [word[0], word.get(1).copied().unwrap_or(0)];
        if current_run != Some(prefix) {
            if finished_runs.contains(&prefix) {
                return Err(format!(
                    "word {:?} at ordinal {} reopens a prefix run that already ended; \
                     sort the list or pass `sort = true`",
                    shown, ordinal
                ));
            }
            if let Some(previous) = current_run.replace(prefix) {
                finished_runs.insert(previous);
            }
        }

        let offset = u32::try_from(table.len())
            .map_err(|_| "word table does not fit 32-bit offsets".to_string())?;
        offsets.push(offset);
        table.extend_from_slice(word);
        table.push(0);
    }

    Ok((table, offsets))
}

/// include_wordlist!("path/to/words.txt", lowercase = false, sort = false)
///
/// Reads a newline-separated word list at compile time (blank lines and lines
/// starting with `#` are skipped) and evaluates to a `&'static cobalt::Dictionary`.
/// The expansion holds three statics:
///  - the word table: every word NUL-terminated, concatenated
///  - the offset index: `[u32]`, one byte offset per word
///  - the prefix guide: `[u16; 65536]`, computed by `cobalt::guide::build` in
///    const context so its byte order is the target's
///
/// Ordinals follow file order unless `sort = true`. Words sharing their first
/// two bytes must be contiguous, words must be unique, and at most 65533 words
/// are accepted; violations are reported as compile errors.
#[proc_macro]
pub fn include_wordlist(input: TokenStream) -> TokenStream {
    let args = syn::parse_macro_input!(input as IncludeWordlistArgs);
    match expand(args) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(args: IncludeWordlistArgs) -> syn::Result<proc_macro2::TokenStream> {
    // Defaults
    let mut lowercase = false;
    let mut sort = false;

    for (ident, expr) in args.assignments.iter() {
        match ident.to_string().as_str() {
            "lowercase" => lowercase = bool_arg(ident, expr)?,
            "sort" => sort = bool_arg(ident, expr)?,
            name => {
                return Err(syn::Error::new_spanned(
                    ident,
                    format!("Unknown argument to include_wordlist: {}", name),
                ))
            }
        }
    }

    // Resolve the word list path relative to the crate using the macro.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").map_err(|_| {
        syn::Error::new(
            args.path.span(),
            "CARGO_MANIFEST_DIR environment variable not set",
        )
    })?;
    let file_path = Path::new(&manifest_dir).join(args.path.value());

    let contents = std::fs::read(&file_path).map_err(|e| {
        syn::Error::new(
            args.path.span(),
            format!(
                "include_wordlist!: failed to read word list '{}': {}",
                file_path.display(),
                e
            ),
        )
    })?;

    let mut words: Vec<Vec<u8>> = Vec::new();
    for line in contents.split(|&b| b == b'\n') {
        let trimmed = line.trim_ascii();
        if trimmed.is_empty() || trimmed.starts_with(b"#") {
            continue;
        }
        words.push(if lowercase {
            trimmed.to_ascii_lowercase()
        } else {
            trimmed.to_vec()
        });
    }
    if sort {
        words.sort_unstable();
    }

    let (table, offsets) = build_table(&words).map_err(|msg| {
        syn::Error::new(
            args.path.span(),
            format!("include_wordlist!: {}: {}", file_path.display(), msg),
        )
    })?;

    let table_lit = LitByteStr::new(&table, Span::call_site());
    let path_lit = LitStr::new(&file_path.to_string_lossy(), Span::call_site());

    Ok(quote! {
        {
            // Rebuild when the word list changes.
            const _: &[u8] = include_bytes!(#path_lit);

            const TABLE: &[u8] = #table_lit;
            const OFFSETS: &[u32] = &[#( #offsets ),*];
            static GUIDE: [u16; ::cobalt::guide::GUIDE_LEN] =
                ::cobalt::guide::build(TABLE, OFFSETS);
            static DICTIONARY: ::cobalt::Dictionary =
                ::cobalt::Dictionary::from_static(TABLE, OFFSETS, &GUIDE);

            &DICTIONARY
        }
    })
}
