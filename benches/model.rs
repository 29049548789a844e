use criterion::*;
use tsp_parser::cst::{AstNode, ModelMember, Statement};
use tsp_parser::Parser;

fn parse_model(source: &str) {
    let tree = Parser::new(source).parse();

    if !tree.diagnostics().is_empty() {
        panic!("error parsing model: {:?}", tree.diagnostics());
    }
    let script = tree.script();

    // Simulate a basic property-list traversal, the way a formatter or
    // language server would walk the tree right after parsing it.
    for statement in script.statements() {
        if let Statement::Model(model) = statement {
            if let Some(properties) = model.property_list() {
                for member in properties.properties() {
                    if let ModelMember::Property(property) = member {
                        black_box(property.name());
                    }
                }
            }
        }
    }
}

const SOURCE: &str = "
model Product {
  id: string;
  name: string;
  price: float64;
  inStock?: boolean = true;
  weight?: float64;
  tags: string[];
  variants: {
    sku: string;
    color?: string;
  }[];
}

model ExampleQuery {
  topProductsFirst?: int32;
  me: Product;
  topProducts: Product[];
}
";

fn bench_parser_model(c: &mut Criterion) {
    c.bench_function("parser_model", move |b| b.iter(|| parse_model(SOURCE)));
}

criterion_group!(benches, bench_parser_model);
criterion_main!(benches);
