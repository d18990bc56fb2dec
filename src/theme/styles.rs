//! Global CSS styles for the portfolio.
//!
//! Dark neutral palette with a cyan/violet accent shared by the beam.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --background: #0b0b0f;
  --card: rgba(24, 24, 27, 0.6);
  --muted: #27272a;
  --border: #27272a;

  /* Text */
  --foreground: #f4f4f5;
  --text-secondary: #a1a1aa;
  --text-muted: #71717a;

  /* Accent (shared with the tracing beam gradient) */
  --accent: #18ccfc;
  --accent-tail: #6344f5;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 250ms ease-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--background);
  color: var(--foreground);
  font-family: var(--font-sans);
  line-height: 1.6;
}

a {
  color: inherit;
}

/* === Page Layout === */
.page {
  position: relative;
  display: flex;
  justify-content: center;
  min-height: 100vh;
  padding: 3rem 1.5rem;
}

.page-grid-bg {
  position: absolute;
  inset: 0;
  background-size: 20px 20px;
  background-image:
    linear-gradient(to right, var(--border) 1px, transparent 1px),
    linear-gradient(to bottom, var(--border) 1px, transparent 1px);
  mask-image: radial-gradient(ellipse at center, transparent 20%, black);
  opacity: 0.4;
  pointer-events: none;
}

.page-content {
  position: relative;
  z-index: 10;
  width: 100%;
  max-width: 64rem;
  display: flex;
  flex-direction: column;
  gap: 4rem;
}

.page-header {
  text-align: center;
}

.page-title {
  font-size: 2.75rem;
  font-weight: 700;
  letter-spacing: -0.02em;
}

.cover {
  background: linear-gradient(90deg, var(--accent), var(--accent-tail));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.tagline {
  margin-top: 1rem;
  color: var(--text-secondary);
  font-size: 1.125rem;
}

.page-nav {
  margin-top: 1.25rem;
  font-size: 0.875rem;
  color: var(--text-muted);
}

.page-nav a:hover {
  color: var(--foreground);
}

.section {
  max-width: 56rem;
  width: 100%;
  margin: 0 auto;
}

.section-title {
  font-size: 1.5rem;
  font-weight: 600;
  text-align: center;
  margin-bottom: 1.5rem;
}

.about p {
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.fade-in {
  animation: fade-up 600ms ease-out both;
}

/* === Buttons === */
.btn-primary {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
  font-size: 0.875rem;
  font-weight: 500;
  text-decoration: none;
  cursor: pointer;
  transition: background var(--transition-fast), border-color var(--transition-fast);
  background: var(--foreground);
  color: var(--background);
  border: 1px solid var(--foreground);
}

.btn-primary:hover {
  background: #d4d4d8;
}

.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-secondary);
  font-size: 1.5rem;
  line-height: 1;
  cursor: pointer;
}

.icon-btn:hover {
  color: var(--foreground);
}

/* === Hover Effect Grid === */
.hover-grid {
  display: grid;
  grid-template-columns: repeat(1, minmax(0, 1fr));
  gap: 1rem;
  padding: 2.5rem 0;
}

@media (min-width: 768px) {
  .hover-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

@media (min-width: 1024px) {
  .hover-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}

.hover-card {
  position: relative;
  display: block;
  height: 100%;
  width: 100%;
  padding: 0.5rem;
  cursor: pointer;
}

.hover-card__image {
  position: relative;
  z-index: 1;
  width: 100%;
  height: 12rem;
  object-fit: cover;
  border-radius: 1rem;
}

.hover-card__body {
  position: relative;
  z-index: 1;
  padding: 1rem;
}

.hover-card__title {
  margin-top: 1rem;
  color: var(--foreground);
  font-weight: 700;
  letter-spacing: 0.025em;
}

.hover-card__description {
  margin-top: 0.5rem;
  color: var(--text-secondary);
  font-size: 0.875rem;
  letter-spacing: 0.025em;
}

.hover-card__highlight {
  position: absolute;
  inset: 0;
  display: block;
  border-radius: 1.5rem;
  background: rgba(30, 41, 59, 0.8);
  animation: fade-in 150ms ease-out both;
}

.hover-backdrop {
  position: fixed;
  inset: 0;
  z-index: 40;
  background: rgba(0, 0, 0, 0.4);
  animation: fade-in 250ms ease-out both;
}

.hover-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: grid;
  place-items: center;
  animation: fade-in 300ms ease-out 50ms both;
}

.expanded-card {
  position: relative;
  display: flex;
  flex-direction: column;
  width: 100%;
  max-width: 500px;
  max-height: 90%;
  overflow: hidden;
  border-radius: 1.5rem;
  background: #171717;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.5);
  animation: scale-in 300ms cubic-bezier(0.25, 0.1, 0.25, 1) both;
}

.expanded-card__close {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  z-index: 1;
}

.expanded-card__image {
  width: 100%;
  height: 16rem;
  object-fit: cover;
}

.expanded-card__body {
  padding: 1rem;
  overflow: auto;
}

.expanded-card__title {
  font-weight: 700;
  color: var(--foreground);
}

.expanded-card__description {
  color: var(--text-secondary);
}

.expanded-card__action {
  margin-top: 1rem;
  animation: fade-up 250ms ease-out 150ms both;
}

.expanded-card__content {
  margin-top: 1rem;
  color: var(--text-secondary);
  font-size: 0.875rem;
  animation: fade-in 250ms ease-out 100ms both;
}

/* === Tech Tags / Stack === */
.tech-tags, .stack-card__items {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  list-style: none;
}

.tech-tag {
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  background: var(--muted);
  font-size: 0.8125rem;
}

.stack-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
  gap: 1.5rem;
}

.stack-card {
  padding: 1.25rem;
  border-radius: 0.5rem;
  border: 1px solid var(--border);
  background: var(--card);
  backdrop-filter: blur(12px);
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.stack-card:hover {
  transform: scale(1.03);
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
}

.stack-card__title {
  font-weight: 600;
  margin-bottom: 1rem;
}

/* === Footer === */
.page-footer {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding-top: 1.5rem;
  border-top: 1px solid var(--border);
  color: var(--text-muted);
  font-size: 0.875rem;
  text-align: center;
}

.page-footer__note {
  max-width: 36rem;
  margin: 0 auto;
}

.page-footer__links {
  display: flex;
  justify-content: center;
  gap: 1.25rem;
}

.page-footer__link {
  text-decoration: none;
  transition: color var(--transition-fast);
}

.page-footer__link:hover {
  color: var(--foreground);
}

/* === Tracing Beam === */
.tracing-beam {
  position: relative;
  width: 100%;
  height: 100%;
  max-width: 64rem;
  margin: 0 auto;
}

.tracing-beam__rail {
  position: absolute;
  top: 0.75rem;
  left: 0;
}

.tracing-beam__svg {
  display: block;
  margin-left: 1rem;
}

.tracing-beam__content {
  padding-left: 4rem;
}

.timeline-entry {
  padding-bottom: 6rem;
}

.timeline-entry__title {
  font-size: 1.75rem;
  font-weight: 700;
  color: var(--text-muted);
}

.timeline-entry__text {
  margin-top: 0.75rem;
  color: var(--text-secondary);
}

/* === Keyframes === */
@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes fade-up {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes scale-in {
  from { opacity: 0; transform: scale(0.95); }
  to { opacity: 1; transform: scale(1); }
}
"#;
