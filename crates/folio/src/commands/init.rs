//! Scaffold a portfolio in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use folio_content::{CATALOG_FILE, PROFILE_FILE};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing portfolio...");

    let content_dir = Path::new("content");
    let static_dir = Path::new("static");

    if content_dir.exists() && !yes {
        tracing::warn!("content/ directory already exists. Use --yes to overwrite.");
        return Ok(());
    }

    fs::create_dir_all(content_dir).context("Failed to create content directory")?;
    fs::create_dir_all(static_dir).context("Failed to create static directory")?;

    write_if_absent(config_path, DEFAULT_CONFIG, yes)?;
    write_if_absent(&content_dir.join(CATALOG_FILE), DEFAULT_PROJECTS, yes)?;
    write_if_absent(&content_dir.join(PROFILE_FILE), DEFAULT_HOME, yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Put your CV and images in static/, then run 'folio serve'.");

    Ok(())
}

fn write_if_absent(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Ok(());
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# folio configuration

[site]
# Shown in the header and footer
name = "Thomas Compton"

# Base URL (for deployment under a sub-path)
base_url = "/"

# Absolute origin, enables sitemap.xml
# site_url = "https://example.com"

[content]
dir = "content"
static_dir = "static"

[build]
output = "dist"
minify = true

[nav]
# CV file inside static_dir
cv = "CV & Portfolio.pdf"
github = "https://github.com/thomasocompton"
linkedin = "https://linkedin.com/in/thomasocompton"

[server]
host = "127.0.0.1"
port = 7777
"#;

const DEFAULT_PROJECTS: &str = r##"[
  {
    "slug": "debate-simulator",
    "title": "Database Debate Simulator",
    "tagline": "Agentic AI debates grounded in retrieved evidence",
    "description": "A RAG-based system to simulate multi-agent debates using short LLM-driven conversations, demonstrating the integration of embeddings, retrieval, and generative AI for interactive reasoning.",
    "skills": ["LangChain", "FAISS", "Hugging Face", "Python", "Gradio", "Google Gemini"],
    "demoUrl": "https://huggingface.co/spaces/ovrelord/union-debate-sim",
    "githubUrl": "https://github.com/thomasocompton/database-debate-simulator"
  },
  {
    "slug": "bible-searcher",
    "title": "Bible Vector Searcher",
    "tagline": "Semantic search over scripture",
    "description": "A RAG-based search engine that finds verses within the Bible using semantic queries, backed by a vector database for contextually relevant results.",
    "skills": ["RAG", "Vector Search", "Hugging Face", "Gradio", "Python"],
    "demoUrl": "https://huggingface.co/spaces/ovrelord/Bible_searcher",
    "githubUrl": "#"
  },
  {
    "slug": "ocr-evaluation",
    "title": "OCR Accuracy Evaluation",
    "description": "Benchmarked Word Error Rate (WER) and Character Error Rate (CER) across OCR engines and LLM-assisted OCR pipelines, with a batched workflow and backoff for high-volume jobs.",
    "skills": ["EasyOCR", "PaddleOCR", "Tesseract", "Google Gemini", "Jiwer", "Deepseek", "Qwen"],
    "githubUrl": "https://github.com/thomasocompton/OCR-evaluation"
  },
  {
    "slug": "bertopic-evaluation",
    "title": "BERTopic Evaluation and Fine-Tuning",
    "description": "Stability metrics and evaluation pipelines for repeated BERTopic runs on large corpora, with a randomized parameter search for diverse, high-quality topic models.",
    "skills": ["BERTopic", "Sentence Transformers", "scipy", "matplotlib", "UMAP"],
    "githubUrl": "https://github.com/thomasocompton/bertopic-evaluation"
  },
  {
    "slug": "literature-review-tools",
    "title": "Literature Review Tools",
    "description": "Modular RAG tools for literature reviews using embeddings and FAISS for semantic search over a document corpus.",
    "skills": ["RAG", "FAISS", "Sentence Transformers", "spaCy", "scikit-learn"],
    "githubUrl": "https://github.com/thomasocompton/literature-review-tools"
  },
  {
    "slug": "pdf-to-speech",
    "title": "PDF-to-Speech Reader",
    "description": "Converts PDF files into audio using a repeatable text-to-speech workflow.",
    "skills": ["pypdf", "pyttsx3", "pydub", "AWS"],
    "githubUrl": "https://github.com/thomasocompton/pdf-to-speech-reader"
  },
  {
    "slug": "hansard-ocr-dataset",
    "title": "Hansard OCR Dataset",
    "description": "A curated dataset of historical UK parliamentary debates prepared for OCR training and evaluation.",
    "skills": ["TrOCR", "torch", "BeautifulSoup", "transformers"],
    "githubUrl": "https://github.com/thomasocompton/hansard-ocr-dataset"
  }
]
"##;

const DEFAULT_HOME: &str = r#"---
name: Thomas Compton
headline: Senior Data Scientist | NLP & LLM Engineer
summary: >-
  Specializing in RAG pipelines, agentic AI, and scalable LLM workflows.
  Experienced in fine-tuning topic models, automating OCR, and building multi-agent systems.
featured:
  - debate-simulator
  - ocr-evaluation
  - bertopic-evaluation
  - pdf-to-speech
education:
  - degree: MSc Social Research
    school: University of York
    dates: 2022 - 2023
  - degree: BA Philosophy
    school: University of Nottingham
    dates: 2019 - 2022
skills:
  - category: LLMs & Vector Search
    items: [LangChain, FAISS, Hugging Face, Google Gemini]
  - category: Programming
    items: [Python, PyTorch, scikit-learn]
  - category: NLP & ML
    items: [spaCy, NLTK, BERTopic, LDA, Sentence Transformers]
  - category: Data & Tools
    items: [AWS, Docker, Git, Gradio, pandas, matplotlib, SQL]
publications:
  - title: "Service, Solidarity, and Self-Help: Samuel Smiles and the Rhetoric of Self-Improvement"
    url: "/Service, Solidarity, and Self-Help.pdf"
  - title: "RAG & LLM Dialogue Systems: Designing Agentic Conversations"
    url: /RAG_LLM_Dialogue.pdf
  - title: "Beyond the black box: Integrating lexical and semantic methods in quantitative discourse analysis with BERTopic"
    url: https://arxiv.org/abs/2508.19099
  - title: Holistic evaluations of topic models
    url: https://arxiv.org/abs/2507.23364
certifications:
  - title: Hugging Face Beginner Certificate
    description: >-
      Completed Stage 1 of Hugging Face's LLM Course, covering fundamentals of
      transformers, prompting, and fine-tuning.
    image: image.webp
contact:
  email: thomasocompton@outlook.com
  github: https://github.com/thomasocompton
  linkedin: https://linkedin.com/in/thomasocompton
---

I am a Senior Data Scientist and ML Engineer specializing in NLP, RAG pipelines,
and scalable LLM workflows. My research applies computational methods to
historical and policy texts, with a focus on OCR, topic modeling, and RAG-based
analysis.
"#;
