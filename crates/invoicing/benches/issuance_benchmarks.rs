use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use salesbook_core::Money;
use salesbook_invoicing::{BookKeeper, DefaultInvoiceFactory, RateTablePolicy, TaxRate, TaxRates};
use salesbook_parties::{ClientData, ClientId};
use salesbook_products::{ProductData, ProductId, ProductType};
use salesbook_sales::{InvoiceRequest, RequestItem};

fn request_with(items: usize) -> InvoiceRequest {
    let client = ClientData::new(ClientId::generate(), "Bench Client").expect("valid client");
    let mut request = InvoiceRequest::new(client);
    for i in 0..items {
        let product_type = ProductType::ALL[i % ProductType::ALL.len()];
        let product = ProductData::builder()
            .with_product_id(ProductId::generate())
            .with_name(format!("product-{i}"))
            .with_product_type(product_type)
            .build()
            .expect("valid product");
        let net = Money::new(100 + i as i64, "EUR");
        request.add(RequestItem::new(product, 1, net).expect("valid item"));
    }
    request
}

fn rate_table() -> RateTablePolicy {
    RateTablePolicy::new(
        TaxRates::new()
            .with_rate(ProductType::Drug, TaxRate::new(500, "5%"))
            .with_rate(ProductType::Food, TaxRate::new(700, "7%"))
            .with_rate(ProductType::Standard, TaxRate::new(2300, "23%")),
    )
}

fn bench_issuance(c: &mut Criterion) {
    let mut group = c.benchmark_group("issuance");
    let book_keeper = BookKeeper::new(DefaultInvoiceFactory);
    let policy = rate_table();

    for items in [0usize, 10, 100, 1_000] {
        let request = request_with(items);
        group.throughput(Throughput::Elements(items as u64));
        group.bench_with_input(BenchmarkId::from_parameter(items), &request, |b, request| {
            b.iter(|| {
                let invoice = book_keeper
                    .issuance(black_box(request), &policy)
                    .expect("issuance succeeds");
                black_box(invoice)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_issuance);
criterion_main!(benches);
