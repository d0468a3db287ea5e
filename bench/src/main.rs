use std::time::Instant;

use clap::{Parser, ValueEnum};
use word_ladder_core::{BuildOptions, EdgePolicy, Graph, ShortestPath};

/// Benchmark word graph construction and queries on synthetic dictionaries.
#[derive(Parser, Debug)]
#[command(name = "word-ladder-bench")]
struct Args {
    /// Dictionary generator to run
    #[arg(value_enum, default_value_t = Generator::All)]
    mode: Generator,

    /// Number of words to generate
    #[arg(default_value_t = 20_000)]
    word_count: usize,

    /// Edge inference policy
    #[arg(long, value_enum, default_value_t = PolicyArg::Substitution)]
    policy: PolicyArg,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Generator {
    /// Run all generators
    All,
    /// Uniformly random 4-letter words
    Random,
    /// Binary-reflected Gray code over {a, b}: every word is one flip from its successor
    Hypercube,
    /// Few stems with every variant of the last letter (dense cliques)
    Clustered,
    /// Words drawn from a small alphabet (high branching, short ladders)
    Dense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Pairwise,
    Substitution,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "word_ladder=debug" } else { "word_ladder=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .init();

    println!("word-ladder-bench");
    println!("=================");
    println!();

    let generators: Vec<(&str, fn(usize) -> Vec<String>)> = match args.mode {
        Generator::Random => vec![("Random 4-letter words", gen_random)],
        Generator::Hypercube => vec![("Hypercube (Gray code)", gen_hypercube)],
        Generator::Clustered => vec![("Clustered stems", gen_clustered)],
        Generator::Dense => vec![("Dense small alphabet", gen_dense)],
        Generator::All => vec![
            ("Random 4-letter words", gen_random as fn(usize) -> Vec<String>),
            ("Hypercube (Gray code)", gen_hypercube),
            ("Clustered stems", gen_clustered),
            ("Dense small alphabet", gen_dense),
        ],
    };

    let policy = match args.policy {
        PolicyArg::Pairwise => EdgePolicy::Pairwise,
        PolicyArg::Substitution => EdgePolicy::Substitution,
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, args.word_count, policy);
    }
}

fn run_benchmark(name: &str, generator: fn(usize) -> Vec<String>, word_count: usize, policy: EdgePolicy) {
    println!("--- {} ---", name);
    println!("Target: {} words, {:?} edges", word_count, policy);

    let words = generator(word_count);
    tracing::debug!(generator = name, words = words.len(), "generated dictionary");
    let options = BuildOptions {
        policy,
        ..BuildOptions::default()
    };

    let t = Instant::now();
    let graph = word_ladder_core::build(&words, &options);
    let build_time = t.elapsed();
    println!(
        "Built in {:.2}s: {} vertices, {} edges, ~{:.1}MB",
        build_time.as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    if graph.is_empty() {
        println!();
        return;
    }

    // Depth-limited BFS from vertex 0
    println!();
    println!("{:>8} {:>12} {:>10}", "depth", "found", "time");
    println!("{:->8} {:->12} {:->10}", "", "", "");

    let mut reached_all = false;
    for depth in [1, 2, 3, 5, 10, 20, 50] {
        let t = Instant::now();
        let layers = word_ladder_core::bfs_limited(&graph, 0, depth).unwrap_or_default();
        let elapsed = t.elapsed();
        let found = layers.flatten().len();
        println!("{:>8} {:>12} {:>8.1}ms", depth, found, elapsed.as_secs_f64() * 1000.0);

        // Fewer layers than allowed means nothing further is reachable
        if layers.len() <= depth as usize {
            println!("{:>8} (reachable set exhausted)", "");
            reached_all = true;
            break;
        }
    }
    if !reached_all {
        println!("{:>8} (depth limit reached)", "");
    }

    println!();
    time_full_traversals(&graph);

    // Shortest path: vertex 0 to last vertex
    let far = graph.vertex_count() - 1;
    let t = Instant::now();
    let path = word_ladder_core::shortest_path(&graph, 0, far);
    let elapsed = t.elapsed();
    let (from, to) = (graph.name(0).unwrap_or("?"), graph.name(far).unwrap_or("?"));
    match path {
        Some(ShortestPath::Found(p)) => println!(
            "Shortest ladder {} → {}: {} hops in {:.1}ms",
            from,
            to,
            p.hops(),
            elapsed.as_secs_f64() * 1000.0
        ),
        _ => println!(
            "Shortest ladder {} → {}: no ladder ({:.1}ms)",
            from,
            to,
            elapsed.as_secs_f64() * 1000.0
        ),
    }
    println!();
}

fn time_full_traversals(graph: &Graph) {
    let t = Instant::now();
    let visited = word_ladder_core::bfs(graph, 0).unwrap_or_default();
    println!(
        "Full BFS: {} vertices in {:.1}ms",
        visited.len(),
        t.elapsed().as_secs_f64() * 1000.0
    );

    let t = Instant::now();
    let visited = word_ladder_core::dfs(graph, 0).unwrap_or_default();
    println!(
        "Full DFS: {} vertices in {:.1}ms",
        visited.len(),
        t.elapsed().as_secs_f64() * 1000.0
    );
}

// ---------------------------------------------------------------------------
// Generators (deterministic, single-threaded)
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

fn random_word(rng: &mut FastRng, len: usize, alphabet: &[u8]) -> String {
    (0..len)
        .map(|_| alphabet[rng.next(alphabet.len() as u64) as usize] as char)
        .collect()
}

/// Uniformly random 4-letter words. Sparse: most words have few neighbors.
fn gen_random(word_count: usize) -> Vec<String> {
    let mut rng = FastRng::new(54321);
    (0..word_count)
        .map(|_| random_word(&mut rng, 4, LETTERS))
        .collect()
}

/// Gray code over {a, b}: word i and word i+1 differ in exactly one letter,
/// and every word has one neighbor per position.
fn gen_hypercube(word_count: usize) -> Vec<String> {
    let bits = (usize::BITS - word_count.max(2).saturating_sub(1).leading_zeros()) as usize;
    (0..word_count)
        .map(|i| {
            let gray = i ^ (i >> 1);
            (0..bits)
                .rev()
                .map(|b| if gray >> b & 1 == 1 { 'b' } else { 'a' })
                .collect()
        })
        .collect()
}

/// Random 5-letter stems, each expanded with all 26 final letters.
fn gen_clustered(word_count: usize) -> Vec<String> {
    let mut rng = FastRng::new(12345);
    let mut words = Vec::with_capacity(word_count);
    while words.len() < word_count {
        let stem = random_word(&mut rng, 4, LETTERS);
        for &c in LETTERS {
            if words.len() == word_count {
                break;
            }
            words.push(format!("{}{}", stem, c as char));
        }
    }
    words
}

/// 6-letter words over a 4-letter alphabet.
fn gen_dense(word_count: usize) -> Vec<String> {
    let mut rng = FastRng::new(99999);
    (0..word_count)
        .map(|_| random_word(&mut rng, 6, b"aeio"))
        .collect()
}
