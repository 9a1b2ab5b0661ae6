//! Category table
//!
//! Maps a page's file name to the keywords and description used in its
//! meta tags. The table is ordered and the first matching entry wins.

use serde::Serialize;

/// One row of the category table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    /// Category key, matched as a substring of the file name
    pub key: &'static str,
    /// Extra substrings that select this category
    pub aliases: &'static [&'static str],
    /// Comma-separated keyword list
    pub keywords: &'static str,
    /// Meta description
    pub description: &'static str,
}

/// Keywords and description resolved for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    /// Comma-separated keyword list
    pub keywords: &'static str,
    /// Meta description
    pub description: &'static str,
}

impl CategoryEntry {
    /// Whether this entry applies to an already lower-cased file name
    fn matches(&self, file_name: &str) -> bool {
        file_name.contains(self.key) || self.aliases.iter().any(|a| file_name.contains(a))
    }

    /// The keywords/description pair of this entry
    pub fn info(&self) -> CategoryInfo {
        CategoryInfo {
            keywords: self.keywords,
            description: self.description,
        }
    }
}

/// Fallback for pages matching no category
pub const DEFAULT_CATEGORY: CategoryInfo = CategoryInfo {
    keywords: "algorithm, data structure, computer science, visualization, interactive",
    description: "Interactive algorithm visualization platform for learning computer science concepts",
};

static CATEGORIES: &[CategoryEntry] = &[
    CategoryEntry {
        key: "sorting",
        aliases: &["sort"],
        keywords: "sorting algorithm, sort, bubble sort, merge sort, quick sort, heap sort, insertion sort, selection sort, radix sort, counting sort",
        description: "Learn about sorting algorithms and their implementations with interactive visualizations",
    },
    CategoryEntry {
        key: "hashing",
        aliases: &["hash", "md5", "bcrypt", "ripemd", "blake"],
        keywords: "hashing algorithm, hash function, cryptographic hash, md5, sha, bcrypt, ripemd, blake",
        description: "Explore hashing algorithms and their applications in cryptography and data structures",
    },
    CategoryEntry {
        key: "distributed",
        aliases: &["consensus", "raft", "paxos", "2pc", "3pc"],
        keywords: "distributed consensus, consensus algorithm, raft, paxos, epaxos, zab, 2pc, 3pc, bft, vsr",
        description: "Understand distributed consensus algorithms used in distributed systems and databases",
    },
    CategoryEntry {
        key: "garbage",
        aliases: &["mark_and_sweep", "reference_counting", "generational"],
        keywords: "garbage collection, gc algorithm, mark and sweep, generational gc, reference counting",
        description: "Learn about garbage collection algorithms used in programming language runtimes",
    },
    CategoryEntry {
        key: "page",
        aliases: &["lru", "lfu", "mru", "fifo", "second_chance"],
        keywords: "page replacement algorithm, fifo, lru, lfu, mru, nru, second chance",
        description: "Study page replacement algorithms used in operating systems memory management",
    },
    CategoryEntry {
        key: "probabilistic",
        aliases: &["bloom", "count_min", "hyperloglog", "flajolet"],
        keywords: "probabilistic data structure, bloom filter, count-min sketch, hyperloglog, flajolet-martin",
        description: "Discover probabilistic data structures for approximate computing and big data",
    },
    CategoryEntry {
        key: "quantum",
        aliases: &["shor", "qubit"],
        keywords: "quantum computing, quantum algorithm, shor code, quantum error correction",
        description: "Explore quantum computing algorithms and error correction techniques",
    },
    CategoryEntry {
        key: "cryptography",
        aliases: &["crypto", "diffie", "elgamal", "merkle", "homomorphic"],
        keywords: "cryptography, encryption, rsa, diffie-hellman, elgamal, merkle tree, homomorphic encryption",
        description: "Learn about cryptographic algorithms and their applications in security",
    },
    CategoryEntry {
        key: "machine",
        aliases: &["regression", "random_forest", "decision_tree", "knn", "naive_bayes", "kmeans"],
        keywords: "machine learning algorithm, linear regression, logistic regression, decision tree, random forest, svm, knn, naive bayes, clustering, pca",
        description: "Study machine learning algorithms and their practical applications",
    },
    CategoryEntry {
        key: "btree",
        aliases: &["b_tree", "bplus"],
        keywords: "b-tree, b+ tree, data structure, tree algorithm, database index",
        description: "Understand B-tree data structures and their use in database indexing",
    },
];

/// The category table in match order
pub fn categories() -> &'static [CategoryEntry] {
    CATEGORIES
}

/// Find the table entry for a file name, if any
pub fn find(file_name: &str) -> Option<&'static CategoryEntry> {
    let lower = file_name.to_lowercase();
    CATEGORIES.iter().find(|entry| entry.matches(&lower))
}

/// Resolve keywords and description for a file name
pub fn resolve(file_name: &str) -> CategoryInfo {
    find(file_name)
        .map(CategoryEntry::info)
        .unwrap_or(DEFAULT_CATEGORY)
}
