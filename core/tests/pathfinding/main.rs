mod dfs;
mod dfs_shortest;
mod dijkstra;
