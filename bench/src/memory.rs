use acscan::AcTrieBuilder;
use acscan_bench::generate_patterns;

fn main() {
    for num in [100, 5000, 15000, 100000] {
        println!("== {num} random patterns ==");
        let patterns = generate_patterns(num, 0);
        let trie = AcTrieBuilder::new().build(&patterns).unwrap();
        println!("states: {}", trie.num_states());
        format_memory("acscan", trie.heap_bytes());
    }
}

fn format_memory(title: &str, bytes: usize) {
    println!(
        "{}: {} bytes, {:.3} MiB",
        title,
        bytes,
        bytes as f64 / (1024.0 * 1024.0)
    );
}
