//! Render tree performance benchmarks
//!
//! Benchmarks for the hot paths of page rendering:
//! - Tree construction
//! - HTML serialization
//! - Text snapshots
//! - Element queries
//!
//! Run with: cargo bench -p pixbank-dom

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use pixbank_dom::{Element, Node, html, text};

// ============================================================================
// Helper Functions
// ============================================================================

fn statement_row(index: usize) -> Node {
    Element::new("tr")
        .class(if index % 7 == 0 { "tx-error" } else { "tx-completed" })
        .child(Element::new("td").child(Node::text(format!("Pagamento {index}"))))
        .child(Element::new("td").child(Node::text(format!("R$ {index},00"))))
        .child(Element::new("td").child(Node::text("completed")))
        .into()
}

fn statement_page(rows: usize) -> Node {
    let mut table = Element::new("table").class("statement");
    for index in 0..rows {
        table = table.child(statement_row(index));
    }

    Node::fragment(vec![
        Element::new("main")
            .class("main-content")
            .child(Element::new("div").child(table))
            .into(),
        Element::new("footer")
            .class("footer")
            .child(
                Element::new("img")
                    .attr("src", "img/logo_pix.png")
                    .attr("alt", "Ícone usuário"),
            )
            .into(),
    ])
}

// ============================================================================
// Construction Benchmarks
// ============================================================================

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    group.bench_function("page_50_rows", |b| b.iter(|| statement_page(black_box(50))));

    group.bench_function("page_500_rows", |b| b.iter(|| statement_page(black_box(500))));

    group.finish();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let small = statement_page(50);
    group.bench_function("html_50_rows", |b| b.iter(|| html::render(black_box(&small))));

    let large = statement_page(500);
    group.bench_function("html_500_rows", |b| b.iter(|| html::render(black_box(&large))));

    group.bench_function("document_500_rows", |b| {
        b.iter(|| html::render_document(black_box("pixbank"), black_box(&large)))
    });

    // Escaping-heavy content
    let noisy: Node = Element::new("p")
        .child(Node::text("a < b && c > d ".repeat(100)))
        .into();
    group.bench_function("html_escaped_text", |b| b.iter(|| html::render(black_box(&noisy))));

    group.finish();
}

// ============================================================================
// Snapshot and Query Benchmarks
// ============================================================================

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    let page = statement_page(500);

    group.bench_function("text_content_500_rows", |b| {
        b.iter(|| text::text_content(black_box(&page)))
    });

    group.bench_function("find_all_rows", |b| b.iter(|| page.find_all(black_box("tr"))));

    group.bench_function("first_img", |b| b.iter(|| page.first(black_box("img"))));

    group.finish();
}

criterion_group!(benches, bench_build, bench_render, bench_queries);

criterion_main!(benches);
