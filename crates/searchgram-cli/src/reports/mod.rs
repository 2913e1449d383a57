mod tables;

pub use self::tables::{
    euros, ngram_table as print_ngram_table, summary as print_summary,
    waste as print_waste_table,
};
