pub mod count;
pub mod disambig;
pub mod peptide;
pub mod recode;
pub mod revtrans;
