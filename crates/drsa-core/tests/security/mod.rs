mod locking;
mod masking;
mod zeroize_on_drop;
