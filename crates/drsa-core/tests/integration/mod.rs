mod keygen_roundtrip;
mod parallel_isolation;
mod stream_to_key;
