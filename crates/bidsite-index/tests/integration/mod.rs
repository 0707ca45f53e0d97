mod build_index;
mod freshness_check;
