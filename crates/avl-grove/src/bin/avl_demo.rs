//! `avl-demo` — exercise the AVL tree from the command line.
//!
//! Usage:
//!   avl-demo [key...]
//!
//! With no arguments, runs the built-in insert/remove scenario. With
//! integer arguments, inserts them in order instead. Either way the tree
//! and the balance verdict are printed at the end of each phase.

use avl_grove::AvlTree;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        let mut tree = AvlTree::new();
        for arg in &args[1..] {
            let key: i64 = match arg.parse() {
                Ok(key) => key,
                Err(_) => {
                    eprintln!("Invalid key {arg:?}; keys must be integers.");
                    std::process::exit(1);
                }
            };
            tree.insert(key);
        }
        report(&tree);
        return;
    }

    let mut tree = AvlTree::new();
    for key in [10, 20, 30, 40, 50, 25, 55, 15, 5, 60] {
        tree.insert(key);
    }
    println!("After inserts:");
    report(&tree);

    for key in [30, 20, 15, 40, 60] {
        tree.remove(key);
    }
    println!("After removals:");
    report(&tree);
}

fn report(tree: &AvlTree<i64>) {
    println!("{}", tree.print());
    println!("keys: {:?}", tree.in_order());
    if tree.is_balanced() {
        println!("The tree is AVL balanced.");
    } else {
        println!("The tree is NOT AVL balanced.");
    }
    println!();
}
