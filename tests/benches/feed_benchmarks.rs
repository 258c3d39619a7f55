//! # AskWeave Benchmarks
//!
//! The feed has no index: every listing is a full scan plus an in-memory
//! sort. These benchmarks track how that scales.
//!
//! | Subsystem | Operation | Expected |
//! |-----------|-----------|----------|
//! | aw-04 Question Feed | rank n questions | O(n log n) |
//! | aw-04 Question Feed | `get_questions` over the in-memory store | O(n log n) + decode |
//! | aw-02 Vote Engine | toggle in a set of n voters | O(n) |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;

use aw_01_document_store::{DocumentStore, DocumentStoreExt, InMemoryDocumentStore};
use aw_02_vote_engine::{vote, VoteDirection};
use aw_04_question_feed::domain::sort::rank;
use aw_04_question_feed::{PageRequest, QuestionFeedApi, QuestionFeedService, SortStrategy};
use shared_types::{Principal, Question};

const SIZES: [usize; 3] = [1_000, 10_000, 50_000];

fn principal(name: String) -> Principal {
    Principal::new(name).unwrap()
}

fn random_questions(n: usize) -> Vec<Question> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|i| {
            let mut q = Question::new("t", "c", vec!["bench".into()], principal(format!("u{i}")));
            q.id = format!("q{i}");
            q.created_at = rng.gen_range(0..1_000_000_000);
            q.vote_count = rng.gen_range(-50..500);
            q.bounty_amount = if rng.gen_bool(0.1) { rng.gen_range(1..1_000) } else { 0 };
            q
        })
        .collect()
}

// ============================================================================
// AW-04: Ranking
// ============================================================================

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("aw-04-rank");

    for size in SIZES {
        let questions = random_questions(size);
        let latest: HashMap<String, u64> = questions
            .iter()
            .step_by(3)
            .map(|q| (q.id.clone(), q.created_at + 1_000))
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        for strategy in SortStrategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), size),
                &questions,
                |b, questions| {
                    b.iter_batched(
                        || questions.clone(),
                        |mut qs| {
                            rank(&mut qs, strategy, &latest);
                            black_box(qs)
                        },
                        criterion::BatchSize::LargeInput,
                    )
                },
            );
        }
    }

    group.finish();
}

fn bench_get_questions(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("aw-04-get-questions");
    group.sample_size(20);

    for size in [1_000, 10_000] {
        let store = Arc::new(InMemoryDocumentStore::new());
        runtime.block_on(async {
            store.initialize().await.unwrap();
            for q in random_questions(size) {
                store.insert(q).await.unwrap();
            }
        });
        let feed = QuestionFeedService::new(store);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("hot_first_page", size), |b| {
            b.iter(|| {
                runtime
                    .block_on(feed.get_questions(PageRequest::new(10, 0, SortStrategy::Hot)))
                    .unwrap()
            })
        });
    }

    group.finish();
}

// ============================================================================
// AW-02: Vote toggling
// ============================================================================

fn bench_vote(c: &mut Criterion) {
    let mut group = c.benchmark_group("aw-02-vote");

    for size in [10, 1_000, 10_000] {
        let upvotes: Vec<Principal> = (0..size).map(|i| principal(format!("up{i}"))).collect();
        let downvotes: Vec<Principal> = (0..size).map(|i| principal(format!("down{i}"))).collect();
        let switcher = principal(format!("down{}", size / 2));

        group.bench_with_input(BenchmarkId::new("switch_down_to_up", size), &size, |b, _| {
            b.iter(|| black_box(vote(&upvotes, &downvotes, &switcher, VoteDirection::Up)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rank, bench_get_questions, bench_vote);
criterion_main!(benches);
