use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use holdem_table::cards::{parse_cards, Card};
use holdem_table::config::TableConfig;
use holdem_table::evaluator::classify;
use holdem_table::table::Table;

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

fn bench_classify(c: &mut Criterion) {
    let pools = [
        ("high_card_5", cards("A;H K;D 7;S 5;C 2;D")),
        ("royal_7", cards("A;S A;H K;S Q;S J;S 10;S 9;S")),
        ("wheel_7", cards("A;C Q;D 9;H 5;S 4;C 3;D 2;H")),
        ("full_house_7", cards("K;S K;D K;H Q;S Q;D Q;H 2;C")),
    ];

    let mut g = c.benchmark_group("classify");
    for (name, pool) in &pools {
        g.bench_with_input(BenchmarkId::from_parameter(name), pool, |b, input| {
            b.iter(|| classify(black_box(input)))
        });
    }
    g.finish();
}

fn bench_hand(c: &mut Criterion) {
    c.bench_function("three_handed_hand", |b| {
        b.iter(|| {
            let mut table = Table::new(1, TableConfig::default().with_seed(1)).unwrap();
            for id in 1..=3 {
                table.join(id, "bench").unwrap();
            }
            table.start_hand().unwrap();
            for open in [Table::open_flop, Table::open_turn, Table::open_river] {
                while table.next_actor() {
                    let to_call = table.to_call().unwrap();
                    table.wager(to_call as i64).unwrap();
                }
                open(&mut table).unwrap();
            }
            black_box(table.showdown().unwrap().len())
        })
    });
}

criterion_group!(benches, bench_classify, bench_hand);
criterion_main!(benches);
