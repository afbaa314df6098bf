//! formlink-report - print label associations for an HTML file
//!
//! ```text
//! formlink-report <file.html> [browser | session.json]
//! ```

use anyhow::{bail, Context};
use formlink::dom::{Document, NodeId};
use formlink::{BrowserProfile, Session, SessionConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const USAGE: &str = "usage: formlink-report <file.html> [browser | session.json]";

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!(USAGE);
    };
    let session = match args.next() {
        Some(arg) if arg.ends_with(".json") => {
            let config = SessionConfig::load(&arg)
                .with_context(|| format!("loading session configuration {}", arg))?;
            Session::from_config(&config)?
        }
        Some(arg) => Session::new(arg.parse::<BrowserProfile>()?),
        None => Session::default(),
    };

    let html = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    let doc = formlink::html::HtmlParser::new()
        .parse_with_url(&html, &path)
        .with_context(|| format!("parsing {}", path))?;

    tracing::info!("Resolving labels in {} as {}", path, session.profile());

    let binding = session.binding();
    let tree = doc.tree();
    let labels: Vec<NodeId> = tree
        .descendants(NodeId::ROOT)
        .filter(|&node| tree.has_tag(node, "label"))
        .collect();

    for (index, &label) in labels.iter().enumerate() {
        let name = tree
            .get_attribute(label, "id")
            .map_or_else(|| format!("label[{}]", index), |id| format!("label#{}", id));
        let html_for = binding.html_for(&doc, label)?;
        let control = binding.control(&doc, label)?;
        let form = binding.form(&doc, label)?;
        println!(
            "{}\tfor={:?}\tcontrol={}\tform={}",
            name,
            html_for,
            describe(&doc, control),
            describe(&doc, form)
        );
    }

    if labels.is_empty() {
        tracing::info!("No labels in {}", path);
    }
    Ok(())
}

fn describe(doc: &Document, node: Option<NodeId>) -> String {
    let Some(node) = node else {
        return "none".to_string();
    };
    let tree = doc.tree();
    let tag = tree.tag_name(node).unwrap_or("?");
    match tree.get_attribute(node, "id") {
        Some(id) if !id.is_empty() => format!("<{} id={:?}>", tag, id),
        _ => format!("<{}>{}", tag, node),
    }
}
