use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use gildedrose_inventory::{Inventory, Item};

/// Seed a mixed inventory cycling through every category.
fn seed_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| {
            let sell_in = (i % 25) as i32 - 5;
            match i % 5 {
                0 => Item::new("Aged Brie", sell_in, (i % 50) as i32),
                1 => Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
                2 => Item::new("Backstage passes to a TAFKAL80ETC concert", sell_in, 20),
                3 => Item::new("Conjured Mana Cake", sell_in, 30),
                _ => Item::new("+5 Dexterity Vest", sell_in, 25),
            }
        })
        .collect()
}

fn bench_advance_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_day");

    for &size in &[100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || Inventory::new(seed_items(size)),
                |mut inventory| {
                    black_box(inventory.advance_day().len());
                    inventory
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_thirty_day_simulation(c: &mut Criterion) {
    c.bench_function("thirty_day_simulation_1k_items", |b| {
        b.iter_batched(
            || Inventory::new(seed_items(1_000)),
            |mut inventory| {
                for _ in 0..30 {
                    black_box(inventory.advance_day().len());
                }
                inventory
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_advance_day, bench_thirty_day_simulation);
criterion_main!(benches);
