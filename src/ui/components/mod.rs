mod block_renderers;
mod layout;
mod snowfall;
